//! Main entry point for pandemic-charts.

use anyhow::Context;
use pandemic_charts::ChartsApp;
use pandemic_common::init_logging;
use pandemic_config::ConfigLoader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load().context("Failed to load configuration")?;

    // Held until exit so buffered file logs are flushed.
    let _log_guard =
        init_logging(&config.logging.to_logging_config()).context("Failed to initialise logging")?;

    info!("Starting pandemic-charts v{}", env!("CARGO_PKG_VERSION"));

    let app = ChartsApp::new(config)?;
    match app.run().await {
        Ok(summary) => {
            info!(
                charts = summary.charts.len(),
                exports = summary.exports.len(),
                "Finished"
            );
            Ok(())
        }
        Err(e) => {
            error!("Run failed: {}", e);
            Err(e.into())
        }
    }
}
