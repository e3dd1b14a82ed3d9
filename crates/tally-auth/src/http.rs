//! HTTP client for the administrator lookup endpoint.
//!
//! Sends `getChatAdministrators` to the Bot API and extracts the member
//! user ids from the response.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use tally_core::{ChatId, UserId};

use crate::error::{AuthError, Result};
use crate::oracle::AdminOracle;

/// Default timeout for oracle requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default Bot API endpoint.
const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Oracle backed by the Bot API `getChatAdministrators` method.
pub struct HttpAdminOracle {
    /// HTTP client (reusable connection pool).
    http_client: reqwest::Client,
    api_url: String,
    token: String,
}

/// Raw JSON envelope from the Bot API.
///
/// The API contract: `{"ok": bool, "result": [...], "description": str?}`.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    ok: bool,
    #[serde(default)]
    result: Vec<ChatMember>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatMember {
    user: MemberUser,
}

#[derive(Debug, Deserialize)]
struct MemberUser {
    id: i64,
}

impl HttpAdminOracle {
    /// Create an oracle against the default Bot API endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_url(DEFAULT_API_URL, token)
    }

    /// Create an oracle against a custom endpoint (used in tests).
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
}

#[async_trait]
impl AdminOracle for HttpAdminOracle {
    async fn admins_of(&self, chat: ChatId) -> Result<HashSet<UserId>> {
        let url = format!(
            "{}/bot{}/getChatAdministrators",
            self.api_url.trim_end_matches('/'),
            self.token
        );

        let response = self
            .http_client
            .get(&url)
            .query(&[("chat_id", chat.as_i64())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AuthError::Unavailable(format!("request timed out: {e}"))
                } else if e.is_connect() {
                    AuthError::Unavailable(format!("connection failed: {e}"))
                } else {
                    AuthError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(AuthError::RequestFailed(format!(
                "HTTP status {}",
                response.status()
            )));
        }

        let envelope: ApiEnvelope = response.json().await.map_err(|e| {
            AuthError::InvalidResponse(format!("failed to parse admin list: {e}"))
        })?;

        if !envelope.ok {
            return Err(AuthError::RequestFailed(
                envelope
                    .description
                    .unwrap_or_else(|| "API replied ok=false".to_string()),
            ));
        }

        Ok(envelope
            .result
            .into_iter()
            .map(|member| UserId::new(member.user.id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_decoding() {
        let raw = r#"{
            "ok": true,
            "result": [
                {"user": {"id": 111, "is_bot": false, "first_name": "A"}, "status": "creator"},
                {"user": {"id": 222, "is_bot": false, "first_name": "B"}, "status": "administrator"}
            ]
        }"#;

        let envelope: ApiEnvelope = serde_json::from_str(raw).unwrap();
        assert!(envelope.ok);
        let ids: HashSet<i64> = envelope.result.iter().map(|m| m.user.id).collect();
        assert_eq!(ids, HashSet::from([111, 222]));
    }

    #[test]
    fn test_error_envelope_decoding() {
        let raw = r#"{"ok": false, "description": "Bad Request: chat not found"}"#;
        let envelope: ApiEnvelope = serde_json::from_str(raw).unwrap();
        assert!(!envelope.ok);
        assert_eq!(
            envelope.description.as_deref(),
            Some("Bad Request: chat not found")
        );
    }
}
