//! Perpscan Scanner
//!
//! Rescans every USDT-margined perpetual on a fixed cadence and prints a
//! long/short/neutral call per contract until interrupted.

use dotenvy::dotenv;
use perpscan::core::ScanRuntime;
use perpscan::{logging, Config, ScanError};
use tokio::signal;
use tokio::sync::watch;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let env = perpscan::config::get_environment();
    info!("Starting Perpscan Scanner");
    info!(environment = %env, "Environment");

    let config = Config::from_env().map_err(ScanError::from)?;
    info!(
        exchange = %config.exchange.base_url,
        quote_asset = %config.exchange.quote_asset,
        bar_interval = %config.scan.bar_interval,
        lookback = config.scan.lookback,
        interval_secs = config.scan.interval.as_secs(),
        "Configuration loaded"
    );

    let runtime = ScanRuntime::from_config(&config)?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received, finishing current symbol...");
                let _ = shutdown_tx.send(true);
            }
            Err(e) => {
                // without a signal listener the scanner runs until killed
                warn!(error = %e, "Failed to listen for shutdown signal");
            }
        }
    });

    let cycles = runtime.run(shutdown_rx).await;
    info!(cycles, "Scanner stopped");

    Ok(())
}
