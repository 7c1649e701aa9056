//! Market data provider interface.

use crate::models::CandleSeries;
use async_trait::async_trait;

/// Result of one external fetch.
///
/// Transient failures (timeouts, rate limits, server errors) may succeed on a
/// later attempt; permanent ones (rejected request, malformed body) will not.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Success(T),
    TransientFailure(String),
    PermanentFailure(String),
}

impl<T> FetchOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    /// The fetched value, dropping the failure reason
    pub fn success(self) -> Option<T> {
        match self {
            FetchOutcome::Success(value) => Some(value),
            FetchOutcome::TransientFailure(_) | FetchOutcome::PermanentFailure(_) => None,
        }
    }
}

#[async_trait]
pub trait MarketDataProvider {
    /// Symbols of every contract currently in the scan universe, in exchange order
    async fn get_universe(&self) -> FetchOutcome<Vec<String>>;

    /// The most recent `limit` bars of `interval` for `symbol`
    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> FetchOutcome<CandleSeries>;
}
