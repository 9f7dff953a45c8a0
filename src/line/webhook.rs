// src/line/webhook.rs
use serde::{Deserialize, Serialize};

/// Envelope POSTed by LINE to the webhook endpoint.
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WebhookEvent {
    Message {
        #[serde(rename = "replyToken", default)]
        reply_token: Option<String>,
        message: MessageContent,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageContent {
    Text { text: String },
    #[serde(other)]
    Other,
}

impl WebhookEvent {
    /// `(reply_token, text)` for a replyable text message, `None` otherwise.
    pub fn text_message(&self) -> Option<(&str, &str)> {
        match self {
            WebhookEvent::Message {
                reply_token: Some(token),
                message: MessageContent::Text { text },
            } => Some((token.as_str(), text.as_str())),
            _ => None,
        }
    }
}

/// Message objects accepted by the reply endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutboundMessage {
    Text {
        text: String,
    },
    Image {
        #[serde(rename = "originalContentUrl")]
        original_content_url: String,
        #[serde(rename = "previewImageUrl")]
        preview_image_url: String,
    },
}

impl OutboundMessage {
    pub fn text(text: impl Into<String>) -> Self {
        OutboundMessage::Text { text: text.into() }
    }
}
