use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{Currency, ProviderId};

/// Fast-path quote: the last traded price and the previous session close.
///
/// Both prices are optional because providers omit them for halted,
/// delisted or freshly listed instruments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FastQuote {
    /// Symbol as passed to the provider
    pub symbol: String,

    /// Last traded price
    pub last_price: Option<f64>,

    /// Previous session close
    pub previous_close: Option<f64>,

    /// Quote currency, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,

    /// Time of the last trade, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Provider the quote came from
    pub source: ProviderId,
}

impl FastQuote {
    /// Create a quote with only the two prices set
    pub fn new(
        symbol: impl Into<String>,
        last_price: Option<f64>,
        previous_close: Option<f64>,
        source: impl Into<ProviderId>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            last_price,
            previous_close,
            currency: None,
            timestamp: None,
            source: source.into(),
        }
    }

    /// Both prices, if both are present and finite.
    pub fn prices(&self) -> Option<(f64, f64)> {
        match (self.last_price, self.previous_close) {
            (Some(last), Some(prev)) if last.is_finite() && prev.is_finite() => Some((last, prev)),
            _ => None,
        }
    }
}
