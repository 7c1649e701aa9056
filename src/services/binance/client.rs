//! Binance USDⓈ-M futures REST client (public market data only)

use std::time::Duration;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::messages::{parse_klines, ExchangeInfo};
use crate::config::ExchangeSettings;
use crate::models::CandleSeries;
use crate::services::market_data::{FetchOutcome, MarketDataProvider};

const EXCHANGE_INFO_PATH: &str = "/fapi/v1/exchangeInfo";
const KLINES_PATH: &str = "/fapi/v1/klines";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(StatusCode),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Whether another attempt could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Transport(e) => !e.is_builder() && !e.is_decode(),
            FetchError::Status(status) => {
                *status == StatusCode::TOO_MANY_REQUESTS
                    || status.as_u16() == 418
                    || status.is_server_error()
            }
            FetchError::Decode(_) => false,
        }
    }
}

#[derive(Clone)]
pub struct BinanceFuturesClient {
    client: Client,
    base_url: String,
    quote_asset: String,
    contract_type: String,
    retries: usize,
}

impl BinanceFuturesClient {
    pub fn new(settings: &ExchangeSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("perpscan/", env!("CARGO_PKG_VERSION")))
            .timeout(settings.request_timeout)
            .build()?;
        Ok(Self::with_client(settings, client))
    }

    pub fn with_client(settings: &ExchangeSettings, client: Client) -> Self {
        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            quote_asset: settings.quote_asset.clone(),
            contract_type: settings.contract_type.clone(),
            retries: settings.fetch_retries,
        }
    }

    /// Symbols matching the configured quote asset and contract type
    pub async fn universe(&self) -> Result<Vec<String>, FetchError> {
        let info: ExchangeInfo = self.get_json(EXCHANGE_INFO_PATH, &[]).await?;
        Ok(info.perpetual_symbols(&self.quote_asset, &self.contract_type))
    }

    pub async fn klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<CandleSeries, FetchError> {
        let query = [
            ("symbol", symbol.to_string()),
            ("interval", interval.to_string()),
            ("limit", limit.to_string()),
        ];
        let rows: Vec<Vec<Value>> = self.get_json(KLINES_PATH, &query).await?;
        parse_klines(symbol, interval, &rows).map_err(|e| FetchError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        if let Some(used_weight) = response
            .headers()
            .get("x-mbx-used-weight-1m")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u32>().ok())
        {
            if used_weight > 1000 {
                warn!(used_weight, "high API weight usage");
            } else {
                debug!(used_weight, "API weight");
            }
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Run `request`, retrying transient failures with exponential backoff
    async fn with_retry<T, F, Fut>(&self, what: &str, request: F) -> FetchOutcome<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, FetchError>>,
    {
        let backoff = ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(500))
            .with_max_delay(Duration::from_secs(5))
            .with_max_times(self.retries);

        let result = request
            .retry(backoff)
            .when(|e: &FetchError| e.is_transient())
            .notify(|e: &FetchError, delay: Duration| {
                warn!(request = what, error = %e, ?delay, "transient fetch failure, retrying");
            })
            .await;

        match result {
            Ok(value) => FetchOutcome::Success(value),
            Err(e) if e.is_transient() => FetchOutcome::TransientFailure(e.to_string()),
            Err(e) => FetchOutcome::PermanentFailure(e.to_string()),
        }
    }
}

#[async_trait]
impl MarketDataProvider for BinanceFuturesClient {
    async fn get_universe(&self) -> FetchOutcome<Vec<String>> {
        self.with_retry("exchangeInfo", || self.universe()).await
    }

    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> FetchOutcome<CandleSeries> {
        self.with_retry(symbol, || self.klines(symbol, interval, limit))
            .await
    }
}
