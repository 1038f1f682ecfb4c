//! Firedrill API — failure-simulation HTTP target.
//!
//! Serves a health check, a bounded CPU-load generator, and a crash
//! trigger, for pointing external monitoring and alerting at a target
//! that misbehaves on demand.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use firedrill_api::config::ApiConfig;
use firedrill_api::routes;
use firedrill_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "firedrill-api starting"
    );

    let config = ApiConfig::from_env();
    let state = AppState::new(&config);
    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");
    tracing::info!("endpoints: GET /health, GET /load/{{milliseconds}} (1-60000), GET /down");

    axum::serve(listener, app).await?;

    Ok(())
}
