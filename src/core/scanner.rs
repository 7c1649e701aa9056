//! One scan cycle: discover the universe, then fetch, classify and report
//! each symbol in discovery order.

use std::sync::Arc;

use chrono::Local;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::{Config, ScanSettings};
use crate::models::Signal;
use crate::services::market_data::{FetchOutcome, MarketDataProvider};
use crate::services::report::ScanReporter;
use crate::signals::SignalClassifier;

/// Result for one symbol in one cycle
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolReport {
    pub symbol: String,
    pub signal: Signal,
    /// Whether a candle series was obtained at all
    pub fetched: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CycleSummary {
    pub universe_size: usize,
    pub reports: Vec<SymbolReport>,
    /// Shutdown was requested before every symbol was scanned
    pub interrupted: bool,
}

impl CycleSummary {
    pub fn count(&self, signal: Signal) -> usize {
        self.reports.iter().filter(|r| r.signal == signal).count()
    }

    pub fn fetch_failures(&self) -> usize {
        self.reports.iter().filter(|r| !r.fetched).count()
    }
}

pub struct Scanner {
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
    reporter: Arc<dyn ScanReporter>,
    classifier: SignalClassifier,
    settings: ScanSettings,
}

impl Scanner {
    pub fn new(
        config: &Config,
        provider: Arc<dyn MarketDataProvider + Send + Sync>,
        reporter: Arc<dyn ScanReporter>,
    ) -> Self {
        Self {
            provider,
            reporter,
            classifier: SignalClassifier::new(config),
            settings: config.scan.clone(),
        }
    }

    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    pub fn reporter(&self) -> &Arc<dyn ScanReporter> {
        &self.reporter
    }

    /// Run one full cycle.
    ///
    /// A failed discovery yields an empty universe; a failed fetch reports
    /// that symbol as neutral. Shutdown is honoured between symbols.
    pub async fn run_cycle(&self, shutdown: &watch::Receiver<bool>) -> CycleSummary {
        self.reporter.cycle_started(Local::now());

        let symbols = match self.provider.get_universe().await {
            FetchOutcome::Success(symbols) => symbols,
            FetchOutcome::TransientFailure(reason) | FetchOutcome::PermanentFailure(reason) => {
                warn!(reason = %reason, "universe discovery failed, nothing to scan this cycle");
                Vec::new()
            }
        };

        info!(universe = symbols.len(), "universe discovered");
        self.reporter.universe_discovered(symbols.len());

        let mut summary = CycleSummary {
            universe_size: symbols.len(),
            reports: Vec::with_capacity(symbols.len()),
            interrupted: false,
        };

        for symbol in &symbols {
            if shutdown_requested(shutdown) {
                info!(
                    scanned = summary.reports.len(),
                    remaining = symbols.len() - summary.reports.len(),
                    "shutdown requested, ending cycle early"
                );
                summary.interrupted = true;
                break;
            }

            let report = self.scan_symbol(symbol).await;
            self.reporter.symbol_classified(&report.symbol, report.signal);
            summary.reports.push(report);
        }

        summary
    }

    /// Fetch and classify a single symbol
    pub async fn scan_symbol(&self, symbol: &str) -> SymbolReport {
        let outcome = self
            .provider
            .get_candles(symbol, &self.settings.bar_interval, self.settings.lookback)
            .await;

        let series = match outcome {
            FetchOutcome::Success(series) => {
                debug!(symbol, bars = series.len(), "candles fetched");
                Some(series)
            }
            FetchOutcome::TransientFailure(reason) => {
                warn!(symbol, reason = %reason, "candle fetch failed after retries");
                None
            }
            FetchOutcome::PermanentFailure(reason) => {
                warn!(symbol, reason = %reason, "candle fetch rejected");
                None
            }
        };

        SymbolReport {
            symbol: symbol.to_string(),
            signal: self.classifier.signal(series.as_ref()),
            fetched: series.is_some(),
        }
    }
}

pub(crate) fn shutdown_requested(shutdown: &watch::Receiver<bool>) -> bool {
    *shutdown.borrow()
}
