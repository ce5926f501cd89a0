use async_trait::async_trait;
use log::{debug, warn};
use macrodata_market_data::{FastQuote, MarketDataError, MarketDataProvider};
use std::sync::Arc;

use super::quotes_model::QuoteDisplay;
use super::quotes_traits::QuoteServiceTrait;
use crate::errors::Result;

/// Live quote lookups against a market data provider.
pub struct QuoteService {
    provider: Arc<dyn MarketDataProvider>,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Fetch and shape a quote, keeping the failure cause.
    ///
    /// A quote without a usable price pair fails with `MissingField`.
    pub async fn fetch_quote_display(&self, symbol: &str) -> Result<QuoteDisplay> {
        let quote = self.provider.get_fast_quote(symbol).await?;
        match QuoteDisplay::from_quote(&quote) {
            Some(display) => Ok(display),
            None => {
                debug!(
                    "{} returned no usable prices for {} (last={:?}, prev={:?})",
                    self.provider.id(),
                    symbol,
                    quote.last_price,
                    quote.previous_close
                );
                Err(unusable_price_field(symbol, &quote).into())
            }
        }
    }
}

/// Names the price that prevents a display: the last price when it is absent
/// or not finite, otherwise the previous close (absent, not finite or zero).
fn unusable_price_field(symbol: &str, quote: &FastQuote) -> MarketDataError {
    let field = match quote.last_price {
        Some(price) if price.is_finite() => "previous_close",
        _ => "last_price",
    };
    MarketDataError::MissingField {
        symbol: symbol.to_string(),
        field: field.to_string(),
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn get_quote_display(&self, symbol: &str) -> QuoteDisplay {
        match self.fetch_quote_display(symbol).await {
            Ok(display) => display,
            Err(e) => {
                warn!("Market error for {}: {}", symbol, e);
                QuoteDisplay::placeholder()
            }
        }
    }
}
