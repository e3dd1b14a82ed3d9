//! Inbound update decoding.
//!
//! The webhook delivers JSON updates in the Bot API shape. Only the
//! fields the ledger needs are decoded; everything else is ignored.

use serde::Deserialize;

use tally_core::{ChatId, UserId};

/// One inbound update.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

/// A chat message inside an update.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default)]
    pub from: Option<User>,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

/// The message sender.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: UserId,
}

/// The chat a message arrived in.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: ChatId,
}

impl Update {
    /// Extract `(text, caller, chat)` when this update carries a text
    /// message with a known sender.
    pub fn message_parts(&self) -> Option<(&str, UserId, ChatId)> {
        let message = self.message.as_ref()?;
        let text = message.text.as_deref()?;
        let from = message.from.as_ref()?;
        Some((text, from.id, message.chat.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_command_update() {
        let raw = r#"{
            "update_id": 10001,
            "message": {
                "message_id": 55,
                "from": {"id": 7, "is_bot": false, "first_name": "Ann"},
                "chat": {"id": -1001, "type": "group", "title": "Class"},
                "date": 1700000000,
                "text": "/adjust Alice 5"
            }
        }"#;

        let update: Update = serde_json::from_str(raw).unwrap();
        let (text, caller, chat) = update.message_parts().unwrap();
        assert_eq!(text, "/adjust Alice 5");
        assert_eq!(caller, UserId::new(7));
        assert_eq!(chat, ChatId::new(-1001));
    }

    #[test]
    fn test_textless_update_has_no_parts() {
        let raw = r#"{
            "update_id": 10002,
            "message": {
                "message_id": 56,
                "from": {"id": 7},
                "chat": {"id": -1001},
                "date": 1700000000
            }
        }"#;

        let update: Update = serde_json::from_str(raw).unwrap();
        assert!(update.message_parts().is_none());
    }

    #[test]
    fn test_messageless_update_has_no_parts() {
        let update: Update = serde_json::from_str(r#"{"update_id": 10003}"#).unwrap();
        assert!(update.message_parts().is_none());
    }
}
