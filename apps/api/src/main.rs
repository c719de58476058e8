mod config;
mod errors;
mod market;
mod models;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::market::load_market;
use crate::routes::build_router;
use crate::scoring::ats::KeywordAtsScorer;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobfit v{}", env!("CARGO_PKG_VERSION"));

    // CSV parsing and sector tagging are blocking work; keep them off the runtime threads.
    let market_config = config.clone();
    let market = tokio::task::spawn_blocking(move || load_market(&market_config)).await??;
    if let Some(market) = &market {
        if market.is_empty() {
            warn!("Job market table is empty; market lookups will return no results");
        } else {
            info!("Job market table ready ({} postings)", market.len());
        }
    }

    let scorer = Arc::new(KeywordAtsScorer);

    let state = AppState {
        config: config.clone(),
        scorer,
        market: market.map(Arc::new),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
