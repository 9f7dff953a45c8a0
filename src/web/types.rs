// src/web/types.rs
use crate::bot::Assistant;
use crate::line::LineClient;
use rocket::serde::Serialize;

/// Managed rocket state shared by every request.
pub struct ServerState {
    pub assistant: Assistant,
    pub line: LineClient,
    pub channel_secret: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
}

impl StandardErrorResponse {
    pub fn new(error: &str, error_code: &str) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            error_code: error_code.to_string(),
        }
    }
}
