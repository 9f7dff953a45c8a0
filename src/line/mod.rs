// src/line/mod.rs
//! The slice of the LINE Messaging API this bot touches: webhook envelopes,
//! the `X-Line-Signature` check and the reply endpoint.

pub mod client;
pub mod signature;
pub mod webhook;

pub use client::LineClient;
#[cfg(test)]
pub use signature::sign_body;
pub use signature::{verify_signature, SIGNATURE_HEADER};
pub use webhook::{MessageContent, OutboundMessage, WebhookEvent, WebhookPayload};
