//! Signal classification from a candle window.
//!
//! Two independent five-criterion vote sets are evaluated against the
//! indicator snapshot at the latest bar:
//!
//! | criterion       | long            | short           |
//! |-----------------|-----------------|-----------------|
//! | trend estimate  | close > EMA     | close < EMA     |
//! | trend oscillator| MACD > 0        | MACD < 0        |
//! | momentum        | RSI > 55        | RSI < 45        |
//! | volatility band | close < upper   | close > lower   |
//! | trend strength  | ADX > 20        | ADX > 20        |
//!
//! Long wins when it reaches the quorum, then short, otherwise neutral.

use crate::config::{Config, IndicatorSettings, VoteThresholds};
use crate::indicators::{IndicatorBank, IndicatorError};
use crate::models::indicators::IndicatorSnapshot;
use crate::models::{CandleSeries, Signal, VoteTally};
use thiserror::Error;
use tracing::debug;

/// Why no directional vote could be taken.
///
/// Every variant surfaces as [`Signal::Neutral`] through
/// [`SignalClassifier::signal`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClassificationUnavailable {
    #[error("no candle series available")]
    MissingSeries,
    #[error("insufficient history: {bars} bars, {required} required")]
    InsufficientHistory { bars: usize, required: usize },
    #[error("indicator evaluation failed: {0}")]
    Indicator(IndicatorError),
}

impl From<IndicatorError> for ClassificationUnavailable {
    fn from(error: IndicatorError) -> Self {
        match error {
            IndicatorError::InsufficientHistory { bars, required } => {
                Self::InsufficientHistory { bars, required }
            }
            other => Self::Indicator(other),
        }
    }
}

/// Outcome of a completed vote
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub signal: Signal,
    pub tally: VoteTally,
    pub snapshot: IndicatorSnapshot,
}

#[derive(Debug, Clone)]
pub struct SignalClassifier {
    bank: IndicatorBank,
    thresholds: VoteThresholds,
}

impl SignalClassifier {
    pub fn new(config: &Config) -> Self {
        Self::with_settings(config.indicators, config.votes)
    }

    pub fn with_settings(indicators: IndicatorSettings, thresholds: VoteThresholds) -> Self {
        Self {
            bank: IndicatorBank::new(indicators, thresholds.min_history),
            thresholds,
        }
    }

    pub fn bank(&self) -> &IndicatorBank {
        &self.bank
    }

    pub fn thresholds(&self) -> &VoteThresholds {
        &self.thresholds
    }

    /// Classify a series, keeping the reason when no vote was possible
    pub fn classify(
        &self,
        series: Option<&CandleSeries>,
    ) -> Result<Verdict, ClassificationUnavailable> {
        let series = series.ok_or(ClassificationUnavailable::MissingSeries)?;
        let snapshot = self.bank.snapshot(series)?;
        let tally = self.tally(&snapshot);

        Ok(Verdict {
            signal: self.decide(&tally),
            tally,
            snapshot,
        })
    }

    /// Classify a series; anything that prevents a vote becomes neutral
    pub fn signal(&self, series: Option<&CandleSeries>) -> Signal {
        match self.classify(series) {
            Ok(verdict) => verdict.signal,
            Err(reason) => {
                debug!(
                    symbol = series.map(|s| s.symbol()).unwrap_or("-"),
                    reason = %reason,
                    "classification unavailable, falling back to neutral"
                );
                Signal::Neutral
            }
        }
    }

    /// Count satisfied criteria on each side
    pub fn tally(&self, snapshot: &IndicatorSnapshot) -> VoteTally {
        let t = &self.thresholds;
        let close = snapshot.close;

        let long = [
            close > snapshot.trend_estimate,
            snapshot.trend_oscillator > 0.0,
            snapshot.momentum > t.momentum_long,
            close < snapshot.upper_band,
            snapshot.trend_strength > t.trend_strength,
        ];
        let short = [
            close < snapshot.trend_estimate,
            snapshot.trend_oscillator < 0.0,
            snapshot.momentum < t.momentum_short,
            close > snapshot.lower_band,
            snapshot.trend_strength > t.trend_strength,
        ];

        VoteTally {
            long: count(&long),
            short: count(&short),
        }
    }

    /// Apply the quorum; long is checked before short
    pub fn decide(&self, tally: &VoteTally) -> Signal {
        if tally.long >= self.thresholds.quorum {
            Signal::Long
        } else if tally.short >= self.thresholds.quorum {
            Signal::Short
        } else {
            Signal::Neutral
        }
    }
}

fn count(votes: &[bool]) -> u8 {
    votes.iter().filter(|&&vote| vote).count() as u8
}
