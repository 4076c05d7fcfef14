use anyhow::Result;
use tower_http::trace::TraceLayer;

use sheet_dashboard::{
    config, logging, routes,
    services::{DashboardRenderer, HttpAnalysisClient, UploadController},
    AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    logging::init_logging()?;

    // Load configuration
    let config = config::Config::from_env()?;

    let client = HttpAnalysisClient::new(&config.api_base_url, config.request_timeout)?;
    match client.health().await {
        Ok(health) => tracing::info!(
            "Analysis service at {} is {} ({})",
            client.base_url(),
            health.status,
            health.message.unwrap_or_default()
        ),
        Err(e) => tracing::warn!("Analysis service at {} unreachable: {}", client.base_url(), e),
    }

    let controller =
        UploadController::new(client, DashboardRenderer::new(config.chart_render_delay));
    let state = AppState::new(controller);

    let app = routes::app(state).layer(TraceLayer::new_for_http());

    tracing::info!("listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
