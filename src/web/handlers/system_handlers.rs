// src/web/handlers/system_handlers.rs
use rocket::serde::json::Json;
use tracing::debug;

pub async fn index_handler() -> &'static str {
    "LINE Bot is running!"
}

pub async fn health_handler() -> Json<&'static str> {
    debug!("Health check");
    Json("OK")
}
