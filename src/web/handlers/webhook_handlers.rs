// src/web/handlers/webhook_handlers.rs
use crate::line::WebhookPayload;
use crate::web::signed_body::SignedBody;
use crate::web::types::ServerState;

use rocket::http::Status;
use rocket::State;
use tracing::{debug, error, info, warn};

/// Answer every replyable text message in a verified webhook call.
///
/// Pipeline and delivery failures are logged and never change the
/// response; LINE only needs to know the call was received.
pub async fn callback_handler(
    body: SignedBody,
    state: &State<ServerState>,
) -> Result<&'static str, Status> {
    let payload: WebhookPayload = serde_json::from_str(body.as_str()).map_err(|e| {
        warn!("Signed webhook body is not a valid payload: {}", e);
        Status::BadRequest
    })?;

    info!(
        "Webhook call for {} with {} event(s)",
        payload.destination.as_deref().unwrap_or("unknown destination"),
        payload.events.len()
    );

    for event in &payload.events {
        let Some((reply_token, text)) = event.text_message() else {
            debug!("Ignoring event: {:?}", event);
            continue;
        };

        let action = state.assistant.respond(text).await;
        if let Err(e) = action.deliver(&state.line, reply_token).await {
            error!("Failed to reply to token {}: {:#}", reply_token, e);
        }
    }

    Ok("OK")
}
