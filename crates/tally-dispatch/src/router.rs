//! The router: maps inbound requests to ledger operations.
//!
//! Every request yields exactly one reply. Successful operations reply
//! with their own text; failures reply with the error's user-visible text
//! and produce one log record.

use std::sync::Arc;

use tally_auth::AdminOracle;
use tally_ledger::Ledger;
use tally_store::ScoreStore;

use crate::command::{Command, CommandRequest};
use crate::error::Result;
use crate::transport::Responder;

/// Greeting for `/start`.
const GREETING: &str = "Hi! I keep this group's points ledger. Send /help to see what I can do.";

/// Reply for `/help`.
const HELP: &str = "Commands:\n\
    /adjust <name> <delta> - add or deduct points (admins)\n\
    /show <name> - show a user's points\n\
    /reset <name> - reset a user's points to 0 (admins)\n\
    /delete <name> - remove a user from the ledger (admins)\n\
    /rank - top 5 and bottom 5 scores\n\
    /users - list everyone on the ledger (admins)";

/// Routes [`CommandRequest`]s to the matching [`Ledger`] operation.
pub struct Router<S: ScoreStore, O: AdminOracle> {
    ledger: Arc<Ledger<S, O>>,
}

impl<S: ScoreStore, O: AdminOracle> Router<S, O> {
    /// Create a router over a shared ledger service.
    pub fn new(ledger: Arc<Ledger<S, O>>) -> Self {
        Self { ledger }
    }

    /// Run the operation for a request and return the reply text.
    ///
    /// Never fails: ledger errors become their user-visible reply and are
    /// logged here, exactly once.
    pub async fn handle(&self, req: &CommandRequest) -> String {
        let result = match req.command {
            Command::Start => Ok(GREETING.to_string()),
            Command::Help => Ok(HELP.to_string()),
            Command::Adjust => self.ledger.adjust(req.chat, req.caller, &req.args).await,
            Command::Show => self.ledger.show(&req.args).await,
            Command::Reset => self.ledger.reset(req.chat, req.caller, &req.args).await,
            Command::Delete => self.ledger.delete(req.chat, req.caller, &req.args).await,
            Command::Rank => self.ledger.rank().await,
            Command::Users => self.ledger.users(req.chat, req.caller).await,
        };

        match result {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(command = %req.command, caller = %req.caller, error = %err, "command failed");
                err.user_reply()
            }
        }
    }

    /// Handle a request and deliver the reply through the responder.
    pub async fn dispatch<R: Responder>(&self, req: &CommandRequest, responder: &R) -> Result<()> {
        let reply = self.handle(req).await;
        responder.reply(req.chat, &reply).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryResponder;
    use tally_testkit::{TestFixture, ADMIN, CHAT, MEMBER};

    fn request(text: &str, caller: tally_core::UserId) -> CommandRequest {
        CommandRequest::from_text(text, caller, CHAT).unwrap()
    }

    #[tokio::test]
    async fn test_start_and_help_need_no_auth() {
        let fixture = TestFixture::new();
        let router = Router::new(fixture.ledger.clone());

        let reply = router.handle(&request("/start", MEMBER)).await;
        assert!(reply.contains("points ledger"));

        let reply = router.handle(&request("/help", MEMBER)).await;
        assert!(reply.contains("/adjust <name> <delta>"));
    }

    #[tokio::test]
    async fn test_dispatch_sends_exactly_one_reply() {
        let fixture = TestFixture::new();
        let router = Router::new(fixture.ledger.clone());
        let responder = MemoryResponder::new();

        router
            .dispatch(&request("/adjust Alice 5", ADMIN), &responder)
            .await
            .unwrap();
        let sent = responder.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, CHAT);
        assert!(sent[0].1.contains("Added 5 points to Alice"));
    }

    #[tokio::test]
    async fn test_failures_still_produce_one_reply() {
        let fixture = TestFixture::new();
        let router = Router::new(fixture.ledger.clone());
        let responder = MemoryResponder::new();

        // Non-admin adjust, unknown show, bad arguments: one reply each.
        for text in ["/adjust Alice 5", "/show Nobody", "/adjust Alice abc"] {
            let caller = if text == "/adjust Alice 5" { MEMBER } else { ADMIN };
            router
                .dispatch(&request(text, caller), &responder)
                .await
                .unwrap();
        }

        let sent = responder.sent().await;
        assert_eq!(sent.len(), 3);
        assert!(sent[0].1.contains("Only chat administrators"));
        assert!(sent[1].1.contains("No points entry"));
        assert!(sent[2].1.contains("Usage: /adjust <name> <delta>"));
    }

    #[tokio::test]
    async fn test_rank_roundtrip_through_router() {
        let fixture = TestFixture::new();
        fixture.seed("Alice", 50).await;
        fixture.seed("Bob", -3).await;
        let router = Router::new(fixture.ledger.clone());

        let reply = router.handle(&request("/rank", MEMBER)).await;
        assert!(reply.contains("1: Alice | 50"));
        assert!(reply.contains("1: Bob | -3"));
    }
}
