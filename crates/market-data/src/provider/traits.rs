//! Market data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{FastQuote, RawNewsFeed};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source, or to
/// stand in for the real provider in tests.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use macrodata_market_data::{FastQuote, MarketDataError, MarketDataProvider};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn get_fast_quote(&self, symbol: &str) -> Result<FastQuote, MarketDataError> {
///         Ok(FastQuote::new(symbol, Some(110.0), Some(100.0), "FIXED"))
///     }
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging.
    fn id(&self) -> &'static str;

    /// Fetch the last price and previous close for a symbol.
    ///
    /// The symbol is passed through as-is. Missing prices are reported as
    /// `None` on the returned quote rather than as an error.
    async fn get_fast_quote(&self, symbol: &str) -> Result<FastQuote, MarketDataError>;

    /// Fetch the raw news feed for a ticker.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Ticker whose news feed should be fetched
    /// * `count` - Upper bound hint for the number of items requested
    ///
    /// Default implementation returns `NotSupported`.
    async fn get_news(&self, symbol: &str, count: usize) -> Result<RawNewsFeed, MarketDataError> {
        let _ = (symbol, count);
        Err(MarketDataError::NotSupported {
            operation: "news".to_string(),
            provider: self.id().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct QuoteOnly;

    #[async_trait]
    impl MarketDataProvider for QuoteOnly {
        fn id(&self) -> &'static str {
            "QUOTE_ONLY"
        }

        async fn get_fast_quote(&self, symbol: &str) -> Result<FastQuote, MarketDataError> {
            Ok(FastQuote::new(symbol, Some(1.0), Some(1.0), "QUOTE_ONLY"))
        }
    }

    #[tokio::test]
    async fn test_news_not_supported_by_default() {
        let err = QuoteOnly.get_news("SPY", 20).await.unwrap_err();
        match err {
            MarketDataError::NotSupported {
                operation,
                provider,
            } => {
                assert_eq!(operation, "news");
                assert_eq!(provider, "QUOTE_ONLY");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
