//! # seasonal-forecast-server
//!
//! REST API server for Holt-Winters forecasts.

use seasonal_forecast::config::ServerConfig;
use seasonal_forecast::service::{router, AppState};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "seasonal_forecast=info,seasonal_forecast_server=info,tower_http=info".into()
            }),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;
    let settings = config.service_settings();

    let app = router(AppState::new(settings)).layer(TraceLayer::new_for_http());

    tracing::info!(
        horizon = settings.horizon,
        stride_days = config.stride_days,
        "seasonal-forecast-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
