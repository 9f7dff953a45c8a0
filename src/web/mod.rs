// src/web/mod.rs

pub mod handlers;
pub mod signed_body;
pub mod types;

pub use signed_body::SignedBody;
pub use types::*;

use crate::bot::Assistant;
use crate::core::ConfigManager;
use crate::line::LineClient;
use anyhow::Result;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{catchers, get, post, routes, Build, Rocket, State};
use tracing::info;

#[post("/callback", data = "<body>")]
pub async fn callback(body: SignedBody, state: &State<ServerState>) -> Result<&'static str, Status> {
    handlers::callback_handler(body, state).await
}

#[get("/")]
pub async fn index() -> &'static str {
    handlers::index_handler().await
}

#[get("/health")]
pub async fn health() -> Json<&'static str> {
    handlers::health_handler().await
}

#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid webhook request",
        "BAD_REQUEST",
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error",
        "INTERNAL_ERROR",
    ))
}

/// Assemble the rocket instance without launching it.
pub fn build_rocket(state: ServerState, port: u16) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("port", port))
        .merge(("address", "0.0.0.0"));

    rocket::custom(figment)
        .manage(state)
        .register("/", catchers![bad_request, internal_error])
        .mount("/", routes![callback, index, health])
}

pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let state = ServerState {
        assistant: Assistant::new(config.sources.clone())?,
        line: LineClient::new(&config.line)?,
        channel_secret: config.line.channel_secret.clone(),
    };

    info!("Starting LINE webhook server on 0.0.0.0:{}", config.port);
    info!("Listing pages served from {}", config.sources.base_url);

    build_rocket(state, config.port)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Web server failed: {}", e))?;

    Ok(())
}
