use serde::{Deserialize, Serialize};
use serde_json::Value;

/// News items exactly as the provider returned them.
///
/// Items are left as raw JSON because providers change their item layout
/// without notice; shaping happens in the core crate.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawNewsFeed {
    /// Ticker the feed was requested for
    pub symbol: String,

    /// Items in provider order
    pub items: Vec<Value>,
}

impl RawNewsFeed {
    pub fn new(symbol: impl Into<String>, items: Vec<Value>) -> Self {
        Self {
            symbol: symbol.into(),
            items,
        }
    }
}
