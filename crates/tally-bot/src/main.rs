//! Tally daemon: entry point for running the points ledger bot.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use tally_auth::HttpAdminOracle;
use tally_core::KeySpace;
use tally_dispatch::Router;
use tally_ledger::{Ledger, LedgerConfig};
use tally_store::SqliteStore;

mod api;
mod logging;
mod server;
mod update;

use api::BotApi;
use server::AppState;

#[derive(Parser)]
#[command(name = "tally-bot", about = "Group points ledger bot daemon")]
struct Cli {
    /// Bot API token.
    #[arg(long, env = "TALLY_BOT_TOKEN")]
    token: String,

    /// Path to the SQLite score store.
    #[arg(long, default_value = "./tally.db", env = "TALLY_STORE_PATH")]
    store_path: PathBuf,

    /// Publicly reachable base URL the webhook registers under.
    #[arg(long, env = "TALLY_WEBHOOK_URL")]
    webhook_url: String,

    /// Port to listen on for webhook deliveries.
    #[arg(long, default_value_t = 8443, env = "TALLY_PORT")]
    port: u16,

    /// Freshness bound for cached admin sets, in seconds.
    #[arg(long, default_value_t = 3600, env = "TALLY_ADMIN_CACHE_TTL")]
    admin_cache_ttl: u64,

    /// Namespace prefix for score keys.
    #[arg(long, default_value = "cls:", env = "TALLY_KEY_PREFIX")]
    key_prefix: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();

    let store = SqliteStore::open(&cli.store_path)?;
    let oracle = HttpAdminOracle::new(cli.token.clone());
    let ledger = Arc::new(Ledger::new(
        store,
        oracle,
        LedgerConfig {
            keyspace: KeySpace::new(cli.key_prefix),
            cache_ttl: Duration::from_secs(cli.admin_cache_ttl),
        },
    ));

    let api = BotApi::new(cli.token.clone());
    let webhook_url = format!(
        "{}/webhook/{}",
        cli.webhook_url.trim_end_matches('/'),
        cli.token
    );
    api.set_webhook(&webhook_url).await?;

    let state = Arc::new(AppState {
        router: Router::new(ledger),
        api,
        token: cli.token,
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, store = %cli.store_path.display(), "webhook registered, serving");

    axum::serve(listener, server::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutting down");
}
