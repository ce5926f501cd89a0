use macrodata_market_data::FastQuote;
use serde::{Deserialize, Serialize};

use super::quotes_format::{change_percent, format_change, format_price};
use crate::constants::{QUOTE_PLACEHOLDER_CHANGE, QUOTE_PLACEHOLDER_PRICE};

/// Display-ready quote: formatted price, formatted change and direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteDisplay {
    pub price: String,
    pub change: String,
    pub pos: bool,
}

impl QuoteDisplay {
    /// Shown whenever no live quote can be produced.
    pub fn placeholder() -> Self {
        Self {
            price: QUOTE_PLACEHOLDER_PRICE.to_string(),
            change: QUOTE_PLACEHOLDER_CHANGE.to_string(),
            pos: true,
        }
    }

    pub fn from_prices(price: f64, previous_close: f64) -> Option<Self> {
        let pct = change_percent(price, previous_close)?;
        Some(Self {
            price: format_price(price),
            change: format_change(pct),
            pos: pct >= 0.0,
        })
    }

    /// `None` when either price is missing or the change is undefined.
    pub fn from_quote(quote: &FastQuote) -> Option<Self> {
        let (price, previous_close) = quote.prices()?;
        Self::from_prices(price, previous_close)
    }

    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }
}
