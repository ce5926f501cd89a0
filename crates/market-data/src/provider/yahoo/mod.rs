//! Yahoo Finance market data provider.
//!
//! Two endpoints are used:
//! - `v8/finance/chart` for the fast-path quote (chart metadata only)
//! - `v1/finance/search` for the ticker news feed
//!
//! Neither endpoint needs the crumb/cookie handshake.

mod models;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::header;
use tracing::debug;
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{FastQuote, RawNewsFeed};
use crate::provider::MarketDataProvider;

use models::{YahooChartMeta, YahooChartResponse, YahooSearchResponse};

const PROVIDER_ID: &str = "YAHOO";
const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider against the public API host.
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a provider against another host (proxies, test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to initialize HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn chart_url(&self, symbol: &str) -> String {
        format!(
            "{}/v8/finance/chart/{}?range=1d&interval=1d",
            self.base_url,
            encode(symbol)
        )
    }

    fn search_url(&self, symbol: &str, count: usize) -> String {
        format!(
            "{}/v1/finance/search?q={}&quotesCount=0&newsCount={}",
            self.base_url,
            encode(symbol),
            count
        )
    }

    /// GET a URL and decode the JSON body, mapping failures per cause.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        symbol: &str,
    ) -> Result<T, MarketDataError> {
        debug!("Yahoo request: {}", url);
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::from_status(PROVIDER_ID, symbol, status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse response for {}: {}", symbol, e),
            })
    }
}

/// Convert chart metadata into a fast quote.
fn meta_to_fast_quote(symbol: &str, meta: YahooChartMeta) -> FastQuote {
    let previous_close = meta.previous_close();
    FastQuote {
        symbol: symbol.to_string(),
        last_price: meta.regular_market_price,
        previous_close,
        currency: meta.currency.map(Into::into),
        timestamp: meta
            .regular_market_time
            .and_then(|ts| Utc.timestamp_opt(ts, 0).single()),
        source: PROVIDER_ID.into(),
    }
}

/// Pull the first chart result out of a chart response.
fn first_chart_meta(
    symbol: &str,
    response: YahooChartResponse,
) -> Result<YahooChartMeta, MarketDataError> {
    if let Some(err) = response.chart.error {
        let description = err.description.unwrap_or_default();
        return match err.code.as_deref() {
            Some("Not Found") => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
            code => Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("{}: {}", code.unwrap_or("Unknown"), description),
            }),
        };
    }

    response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .map(|result| result.meta)
        .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_fast_quote(&self, symbol: &str) -> Result<FastQuote, MarketDataError> {
        let response: YahooChartResponse = self.get_json(&self.chart_url(symbol), symbol).await?;
        let meta = first_chart_meta(symbol, response)?;
        Ok(meta_to_fast_quote(symbol, meta))
    }

    async fn get_news(&self, symbol: &str, count: usize) -> Result<RawNewsFeed, MarketDataError> {
        let response: YahooSearchResponse = self
            .get_json(&self.search_url(symbol, count), symbol)
            .await?;
        debug!("Yahoo returned {} news items for {}", response.news.len(), symbol);
        Ok(RawNewsFeed::new(symbol, response.news))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> YahooProvider {
        YahooProvider::with_base_url("http://localhost:9999/").unwrap()
    }

    #[test]
    fn test_chart_url_encodes_symbol() {
        let url = provider().chart_url("GC=F");
        assert_eq!(
            url,
            "http://localhost:9999/v8/finance/chart/GC%3DF?range=1d&interval=1d"
        );
    }

    #[test]
    fn test_chart_url_index_symbol() {
        let url = provider().chart_url("^GSPC");
        assert!(url.contains("/chart/%5EGSPC?"));
    }

    #[test]
    fn test_search_url() {
        let url = provider().search_url("SPY", 20);
        assert_eq!(
            url,
            "http://localhost:9999/v1/finance/search?q=SPY&quotesCount=0&newsCount=20"
        );
    }

    #[test]
    fn test_first_chart_meta_not_found() {
        let response: YahooChartResponse = serde_json::from_str(
            r#"{"chart": {"result": null, "error": {"code": "Not Found", "description": "delisted"}}}"#,
        )
        .unwrap();
        let err = first_chart_meta("NOPE", response).unwrap_err();
        assert!(matches!(err, MarketDataError::SymbolNotFound(ref s) if s == "NOPE"));
    }

    #[test]
    fn test_first_chart_meta_empty_result() {
        let response: YahooChartResponse =
            serde_json::from_str(r#"{"chart": {"result": [], "error": null}}"#).unwrap();
        assert!(matches!(
            first_chart_meta("SPY", response),
            Err(MarketDataError::SymbolNotFound(_))
        ));
    }

    #[test]
    fn test_first_chart_meta_other_error() {
        let response: YahooChartResponse = serde_json::from_str(
            r#"{"chart": {"result": null, "error": {"code": "Bad Request", "description": "Invalid input"}}}"#,
        )
        .unwrap();
        match first_chart_meta("SPY", response) {
            Err(MarketDataError::ProviderError { message, .. }) => {
                assert_eq!(message, "Bad Request: Invalid input");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_meta_to_fast_quote() {
        let meta: YahooChartMeta = serde_json::from_str(
            r#"{"currency": "USD", "regularMarketPrice": 110.0, "chartPreviousClose": 100.0, "regularMarketTime": 1704067200}"#,
        )
        .unwrap();
        let quote = meta_to_fast_quote("SPY", meta);
        assert_eq!(quote.prices(), Some((110.0, 100.0)));
        assert_eq!(quote.currency.as_deref(), Some("USD"));
        assert_eq!(quote.timestamp.unwrap().timestamp(), 1704067200);
        assert_eq!(quote.source, "YAHOO");
    }

    #[test]
    fn test_meta_without_prices() {
        let meta: YahooChartMeta = serde_json::from_str(r#"{"symbol": "XYZ"}"#).unwrap();
        let quote = meta_to_fast_quote("XYZ", meta);
        assert!(quote.prices().is_none());
    }

    #[test]
    fn test_provider_id() {
        assert_eq!(provider().id(), "YAHOO");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let provider = YahooProvider::with_base_url("http://127.0.0.1:1").unwrap();
        let err = provider.get_fast_quote("SPY").await.unwrap_err();
        assert!(matches!(err, MarketDataError::Network(_)), "{err:?}");
    }
}
