//! Bot API client: reply delivery and webhook registration.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use tally_core::ChatId;
use tally_dispatch::{DispatchError, Responder};

/// Default timeout for Bot API requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default Bot API endpoint.
const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Errors from the Bot API client.
#[derive(Debug, Error)]
pub enum BotError {
    /// The endpoint could not be reached or the request failed in flight.
    #[error("request failed: {0}")]
    Request(String),

    /// The API answered with a failure.
    #[error("API error: {0}")]
    Api(String),
}

/// Client for the Bot API methods the daemon uses.
pub struct BotApi {
    /// HTTP client (reusable connection pool).
    http_client: reqwest::Client,
    api_url: String,
    token: String,
}

/// Minimal response envelope: `{"ok": bool, "description": str?}`.
#[derive(Debug, Deserialize)]
struct ApiAck {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl BotApi {
    /// Create a client against the default Bot API endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_url(DEFAULT_API_URL, token)
    }

    /// Create a client against a custom endpoint (used in tests).
    pub fn with_api_url(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http_client,
            api_url: api_url.into(),
            token: token.into(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.api_url.trim_end_matches('/'),
            self.token,
            method
        )
    }

    async fn call(&self, method: &str, body: serde_json::Value) -> Result<(), BotError> {
        let response = self
            .http_client
            .post(self.method_url(method))
            .json(&body)
            .send()
            .await
            .map_err(|e| BotError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BotError::Api(format!("HTTP status {}", response.status())));
        }

        let ack: ApiAck = response
            .json()
            .await
            .map_err(|e| BotError::Api(format!("unreadable response: {e}")))?;
        if !ack.ok {
            return Err(BotError::Api(
                ack.description
                    .unwrap_or_else(|| "API replied ok=false".to_string()),
            ));
        }
        Ok(())
    }

    /// Send a text message to a chat.
    pub async fn send_message(&self, chat: ChatId, text: &str) -> Result<(), BotError> {
        self.call(
            "sendMessage",
            serde_json::json!({ "chat_id": chat.as_i64(), "text": text }),
        )
        .await
    }

    /// Point the webhook at the given public URL.
    pub async fn set_webhook(&self, url: &str) -> Result<(), BotError> {
        self.call("setWebhook", serde_json::json!({ "url": url }))
            .await
    }
}

#[async_trait]
impl Responder for BotApi {
    async fn reply(&self, chat: ChatId, text: &str) -> Result<(), DispatchError> {
        self.send_message(chat, text)
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_url_embeds_token() {
        let api = BotApi::with_api_url("https://example.test/", "SECRET");
        assert_eq!(
            api.method_url("sendMessage"),
            "https://example.test/botSECRET/sendMessage"
        );
    }

    #[test]
    fn test_ack_decoding() {
        let ack: ApiAck = serde_json::from_str(r#"{"ok": true, "result": true}"#).unwrap();
        assert!(ack.ok);

        let ack: ApiAck =
            serde_json::from_str(r#"{"ok": false, "description": "Unauthorized"}"#).unwrap();
        assert!(!ack.ok);
        assert_eq!(ack.description.as_deref(), Some("Unauthorized"));
    }
}
