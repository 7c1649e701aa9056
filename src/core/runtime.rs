//! Scan loop: repeats cycles on a fixed cadence until shutdown is requested

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::watch;
use tracing::info;

use super::scanner::{shutdown_requested, Scanner};
use crate::config::Config;
use crate::error::ScanError;
use crate::models::Signal;
use crate::services::binance::BinanceFuturesClient;
use crate::services::report::ConsoleReporter;

pub struct ScanRuntime {
    scanner: Scanner,
    interval: Duration,
}

impl ScanRuntime {
    pub fn new(scanner: Scanner) -> Self {
        let interval = scanner.settings().interval;
        Self { scanner, interval }
    }

    /// Wire the Binance provider and the console reporter from configuration
    pub fn from_config(config: &Config) -> Result<Self, ScanError> {
        let provider = Arc::new(BinanceFuturesClient::new(&config.exchange)?);
        let reporter = Arc::new(ConsoleReporter::new(config));
        Ok(Self::new(Scanner::new(config, provider, reporter)))
    }

    /// Run cycles until `shutdown` flips to `true`; returns the number of
    /// cycles that ran.
    ///
    /// Shutdown is checked at the start of every cycle, between symbols and
    /// during the sleep. If the sender is dropped the loop keeps running.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) -> u64 {
        info!(
            interval_secs = self.interval.as_secs(),
            "ScanRuntime: starting scan loop"
        );
        self.scanner.reporter().scan_started(self.interval);

        let mut cycles = 0u64;
        loop {
            if shutdown_requested(&shutdown) {
                break;
            }

            let started = Instant::now();
            let summary = self.scanner.run_cycle(&shutdown).await;
            cycles += 1;

            info!(
                cycle = cycles,
                universe = summary.universe_size,
                long = summary.count(Signal::Long),
                short = summary.count(Signal::Short),
                neutral = summary.count(Signal::Neutral),
                fetch_failures = summary.fetch_failures(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "ScanRuntime: cycle finished"
            );

            if summary.interrupted || shutdown_requested(&shutdown) {
                break;
            }

            self.scanner.reporter().cycle_finished(self.interval);
            if sleep_or_shutdown(self.interval, &mut shutdown).await {
                break;
            }
        }

        info!(cycles, "ScanRuntime: scan loop stopped");
        cycles
    }
}

/// Sleep for `duration`; returns `true` if shutdown was requested meanwhile
async fn sleep_or_shutdown(duration: Duration, shutdown: &mut watch::Receiver<bool>) -> bool {
    let sleep = tokio::time::sleep(duration);
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            _ = &mut sleep => return false,
            changed = shutdown.changed() => match changed {
                Ok(()) if *shutdown.borrow_and_update() => return true,
                Ok(()) => continue,
                Err(_) => {
                    // no one left to request shutdown
                    (&mut sleep).await;
                    return false;
                }
            },
        }
    }
}
