//! Command names and the request envelope.

use std::fmt;

use tally_core::{args, ChatId, UserId};

use crate::error::DispatchError;

/// The commands the ledger serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Start,
    Help,
    Adjust,
    Show,
    Reset,
    Delete,
    Rank,
    Users,
}

impl Command {
    /// Parse a bare command name (no slash, no bot mention).
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Self::Start),
            "help" => Some(Self::Help),
            "adjust" => Some(Self::Adjust),
            "show" => Some(Self::Show),
            "reset" => Some(Self::Reset),
            "delete" => Some(Self::Delete),
            "rank" => Some(Self::Rank),
            "users" => Some(Self::Users),
            _ => None,
        }
    }

    /// The command's wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Help => "help",
            Self::Adjust => "adjust",
            Self::Show => "show",
            Self::Reset => "reset",
            Self::Delete => "delete",
            Self::Rank => "rank",
            Self::Users => "users",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One inbound command: what to do, who asked, where from, and with what
/// arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub command: Command,
    pub caller: UserId,
    pub chat: ChatId,
    pub args: Vec<String>,
}

impl CommandRequest {
    /// Parse raw message text into a request.
    ///
    /// The first token must be `/name` or `/name@botname`; the bot
    /// mention, if present, is discarded. Remaining tokens become the
    /// argument list.
    pub fn from_text(
        text: &str,
        caller: UserId,
        chat: ChatId,
    ) -> Result<Self, DispatchError> {
        let mut tokens = args::tokenize(text);
        if tokens.is_empty() {
            return Err(DispatchError::NotACommand(text.to_string()));
        }

        let head = tokens.remove(0);
        let name = head
            .strip_prefix('/')
            .ok_or_else(|| DispatchError::NotACommand(text.to_string()))?;
        let name = name.split('@').next().unwrap_or(name);

        let command =
            Command::parse(name).ok_or_else(|| DispatchError::UnknownCommand(name.to_string()))?;

        Ok(Self {
            command,
            caller,
            chat,
            args: tokens,
        })
    }
}
