//! Console surface for scan results

use std::io::{self, Write};
use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::style::Stylize;

use crate::config::Config;
use crate::models::Signal;

/// Receives scan progress as it happens, in scan order
pub trait ScanReporter: Send + Sync {
    fn scan_started(&self, _interval: Duration) {}

    fn cycle_started(&self, at: DateTime<Local>);

    fn universe_discovered(&self, size: usize);

    fn symbol_classified(&self, symbol: &str, signal: Signal);

    fn cycle_finished(&self, next_scan_in: Duration);
}

/// Colorized line-per-symbol output on stdout
pub struct ConsoleReporter {
    quote_asset: String,
    contract_type: String,
}

impl ConsoleReporter {
    pub fn new(config: &Config) -> Self {
        Self {
            quote_asset: config.exchange.quote_asset.clone(),
            contract_type: config.exchange.contract_type.clone(),
        }
    }

    fn emit(&self, line: impl std::fmt::Display) {
        // stdout may be a closed pipe; the scan keeps going regardless
        let _ = writeln!(io::stdout().lock(), "{}", line);
    }
}

impl ScanReporter for ConsoleReporter {
    fn scan_started(&self, interval: Duration) {
        let banner = format!(
            "Starting endless {}-margined {} futures scanner, rescanning every {}",
            self.quote_asset,
            self.contract_type.to_lowercase(),
            describe_wait(interval)
        );
        self.emit(banner.as_str().cyan());
    }

    fn cycle_started(&self, at: DateTime<Local>) {
        self.emit(format!("\n=== SCAN: {} ===", at.format("%Y-%m-%d %H:%M:%S")));
        self.emit("Loading markets from the exchange...");
    }

    fn universe_discovered(&self, size: usize) {
        self.emit(format!(
            "Found {} {} contracts quoted in {}.",
            size, self.contract_type, self.quote_asset
        ));
    }

    fn symbol_classified(&self, symbol: &str, signal: Signal) {
        match signal {
            Signal::Long => self.emit(format!("{}: {}", symbol, "LONG".green())),
            Signal::Short => self.emit(format!("{}: {}", symbol, "SHORT".red())),
            Signal::Neutral => self.emit(format!("{}: {}", symbol, signal)),
        }
    }

    fn cycle_finished(&self, next_scan_in: Duration) {
        self.emit(format!(
            "\nWaiting {} until the next scan...\n",
            describe_wait(next_scan_in)
        ));
    }
}

/// Human-readable wait, in whole minutes when possible
pub fn describe_wait(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 && secs % 60 == 0 {
        format!("{} minute(s)", secs / 60)
    } else {
        format!("{} second(s)", secs)
    }
}
