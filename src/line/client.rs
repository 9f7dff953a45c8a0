// src/line/client.rs
use super::webhook::OutboundMessage;
use crate::core::LineConfig;
use anyhow::{Context, Result};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};

const REPLY_ENDPOINT: &str = "/v2/bot/message/reply";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: &'a [OutboundMessage],
}

/// Outbound side of the Messaging API. Only the reply call is used.
#[derive(Clone)]
pub struct LineClient {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl LineClient {
    pub fn new(config: &LineConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            access_token: config.channel_access_token.clone(),
        })
    }

    pub async fn reply(&self, reply_token: &str, messages: &[OutboundMessage]) -> Result<()> {
        let url = format!("{}{}", self.base_url, REPLY_ENDPOINT);
        let payload = ReplyRequest {
            reply_token,
            messages,
        };

        debug!("Replying with {} message(s) to token {}", messages.len(), reply_token);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&payload)
            .send()
            .await
            .context("Failed to call LINE reply API")?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("LINE reply API error response: {}", error_text);
            anyhow::bail!("LINE reply failed with status {}: {}", status, error_text)
        }
    }

    pub async fn reply_text(&self, reply_token: &str, text: impl Into<String>) -> Result<()> {
        self.reply(reply_token, &[OutboundMessage::text(text)]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base_url: &str) -> LineConfig {
        LineConfig {
            channel_access_token: "access-token".to_string(),
            channel_secret: "secret".to_string(),
            api_base_url: base_url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_reply_text_posts_expected_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/bot/message/reply"))
            .and(header("authorization", "Bearer access-token"))
            .and(body_json(json!({
                "replyToken": "token-1",
                "messages": [{ "type": "text", "text": "哈囉" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = LineClient::new(&config(&server.uri())).unwrap();
        client.reply_text("token-1", "哈囉").await.unwrap();
    }

    #[tokio::test]
    async fn test_reply_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string(r#"{"message":"Invalid reply token"}"#),
            )
            .mount(&server)
            .await;

        let client = LineClient::new(&config(&server.uri())).unwrap();
        let err = client.reply_text("stale", "hi").await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("400"));
        assert!(message.contains("Invalid reply token"));
    }
}
