/// Maximum number of normalized news items returned to clients
pub const MAX_NEWS_ITEMS: usize = 10;

/// Items requested from the provider; more than returned since some get dropped
pub const NEWS_FETCH_COUNT: usize = 20;

/// Ticker whose feed stands in for "the market" on the news endpoint
pub const DEFAULT_NEWS_SYMBOL: &str = "SPY";

/// Publisher shown when a news item names none
pub const DEFAULT_NEWS_PUBLISHER: &str = "Market News";

/// Price shown when no live quote is available
pub const QUOTE_PLACEHOLDER_PRICE: &str = "---";

/// Change shown when no live quote is available
pub const QUOTE_PLACEHOLDER_CHANGE: &str = "0.00%";

/// Date format for serialized observation dates
pub const OBSERVATION_DATE_FORMAT: &str = "%Y-%m-%d";
