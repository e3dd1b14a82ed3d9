//! Responder abstraction: the outbound half of the chat transport.
//!
//! The dispatcher does not know how replies travel. Implementations may
//! use the Bot API, a test buffer, or any other delivery path.

use async_trait::async_trait;

use tally_core::ChatId;

use crate::error::{DispatchError, Result};

/// Responder trait for delivering replies.
///
/// Implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait Responder: Send + Sync {
    /// Deliver one reply string to the origin chat.
    async fn reply(&self, chat: ChatId, text: &str) -> Result<()>;
}

/// An in-memory responder for testing.
///
/// Records every reply so tests can assert on what was sent.
pub struct MemoryResponder {
    sent: tokio::sync::Mutex<Vec<(ChatId, String)>>,
}

impl MemoryResponder {
    /// Create an empty responder.
    pub fn new() -> Self {
        Self {
            sent: tokio::sync::Mutex::new(Vec::new()),
        }
    }

    /// All replies recorded so far, in send order.
    pub async fn sent(&self) -> Vec<(ChatId, String)> {
        self.sent.lock().await.clone()
    }
}

impl Default for MemoryResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Responder for MemoryResponder {
    async fn reply(&self, chat: ChatId, text: &str) -> Result<()> {
        self.sent.lock().await.push((chat, text.to_string()));
        Ok(())
    }
}

/// A responder whose every delivery fails, for error-path tests.
pub struct FailingResponder;

#[async_trait]
impl Responder for FailingResponder {
    async fn reply(&self, _chat: ChatId, _text: &str) -> Result<()> {
        Err(DispatchError::Transport("delivery refused".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_responder_records_in_order() {
        let responder = MemoryResponder::new();
        let chat = ChatId::new(-1);

        responder.reply(chat, "first").await.unwrap();
        responder.reply(chat, "second").await.unwrap();

        let sent = responder.sent().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].1, "first");
        assert_eq!(sent[1].1, "second");
    }
}
