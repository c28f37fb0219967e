use std::sync::Arc;

use anyhow::Context;

use libris_api::app::{self, services::AppServices};
use libris_api::config::ApiConfig;
use libris_core::SystemClock;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    libris_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        loan_period_days = config.policy.loan_period.num_days(),
        daily_penalty = %config.policy.daily_penalty_rate,
        "lending policy loaded"
    );

    let services = AppServices::in_memory(Arc::new(SystemClock), config.policy);
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
