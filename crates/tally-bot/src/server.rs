//! Webhook server: the inbound half of the chat transport.
//!
//! One route, `POST /webhook/{token}`, receiving Bot API updates. The
//! path token must match the configured bot token. Malformed bodies and
//! non-command messages are logged and acknowledged; they never take the
//! service down.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::post;

use tally_auth::HttpAdminOracle;
use tally_dispatch::{CommandRequest, DispatchError, Router};
use tally_store::SqliteStore;

use crate::api::BotApi;
use crate::update::Update;

/// The router instantiated with the daemon's concrete backends.
pub type BotRouter = Router<SqliteStore, HttpAdminOracle>;

/// Shared state for the webhook handlers.
pub struct AppState {
    pub router: BotRouter,
    pub api: BotApi,
    pub token: String,
}

/// Build the axum application.
pub fn app(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/webhook/:token", post(webhook))
        .with_state(state)
}

async fn webhook(
    Path(token): Path<String>,
    State(state): State<Arc<AppState>>,
    body: String,
) -> StatusCode {
    if token != state.token {
        return StatusCode::NOT_FOUND;
    }

    let update: Update = match serde_json::from_str(&body) {
        Ok(update) => update,
        Err(e) => {
            tracing::warn!(error = %e, "dropping malformed update");
            return StatusCode::OK;
        }
    };

    let Some((text, caller, chat)) = update.message_parts() else {
        return StatusCode::OK;
    };

    let request = match CommandRequest::from_text(text, caller, chat) {
        Ok(request) => request,
        Err(DispatchError::NotACommand(_)) => return StatusCode::OK,
        Err(e) => {
            tracing::debug!(update_id = update.update_id, error = %e, "ignoring update");
            return StatusCode::OK;
        }
    };

    if let Err(e) = state.router.dispatch(&request, &state.api).await {
        tracing::error!(command = %request.command, error = %e, "failed to deliver reply");
    }

    StatusCode::OK
}
