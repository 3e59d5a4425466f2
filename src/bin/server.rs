//! Freight Quote HTTP Server
//!
//! Loads settings, picks the quote store, and serves the REST API.
//!
//! # Usage
//!
//! ```bash
//! # In-memory storage
//! STORAGE=memory cargo run --bin freight-quote-server
//!
//! # PostgreSQL storage (migrations run on startup)
//! DB_USER=postgres DB_PASSWORD=postgres DB_HOST=localhost DB_NAME=freight_quote \
//!   cargo run --bin freight-quote-server
//! ```
//!
//! # Environment Variables
//!
//! See [`freight_quote::config`] for the full list. Logging reads `RUST_LOG`
//! (default `info`) and `LOG_FORMAT=json` switches to JSON lines.

use anyhow::Context;
use freight_quote::api::rest::{AppState, create_router};
use freight_quote::application::services::{MetricsService, QuoteService};
use freight_quote::config::{Settings, StorageBackend};
use freight_quote::infrastructure::carrier_api::{CarrierQuoteGateway, FreteRapidoClient};
use freight_quote::infrastructure::persistence::{
    InMemoryQuoteRepository, PostgresQuoteRepository, QuoteRepository,
};
use std::env;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn open_repository(settings: &Settings) -> anyhow::Result<Arc<dyn QuoteRepository>> {
    match settings.storage {
        StorageBackend::Memory => {
            warn!("using in-memory storage; quotes are lost on restart");
            Ok(Arc::new(InMemoryQuoteRepository::new()))
        }
        StorageBackend::Postgres => {
            let repo = PostgresQuoteRepository::connect(
                &settings.database_url(),
                settings.db_max_connections,
            )
            .await
            .context("failed to connect to database")?;
            repo.run_migrations()
                .await
                .context("failed to run migrations")?;
            info!(host = %settings.db_host, db = %settings.db_name, "database ready");
            Ok(Arc::new(repo))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;
    init_tracing();

    info!(version = env!("CARGO_PKG_VERSION"), storage = %settings.storage, "starting freight quote server");

    let repository = open_repository(&settings).await?;
    let gateway: Arc<dyn CarrierQuoteGateway> = Arc::new(
        FreteRapidoClient::new(settings.carrier_api()).context("failed to build carrier client")?,
    );

    let state = AppState::new(
        QuoteService::new(gateway, repository.clone()),
        MetricsService::new(repository).with_default_last_quotes(settings.metrics_default_last_quotes),
    );
    let app = create_router(Arc::new(state));

    let addr = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
