use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use config_tracker_api::{app, config::Config, middleware::logging};
use domain::services::FileNotifier;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = Config::load()?;

    logging::init_logging(&config.logging);

    info!("Starting Config Tracker API v{}", env!("CARGO_PKG_VERSION"));

    let notifier = Arc::new(FileNotifier::new(&config.notifications.log_path));

    let addr = config.socket_addr();
    let app = app::create_app(config, notifier);

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
