//! Macro Data Market Data Crate
//!
//! Live pass-through access to a third-party market data provider for the
//! Macro Data API.
//!
//! # Overview
//!
//! The crate supports two request shapes:
//! - Fast-path quotes: last price and previous close only, no history
//! - News feeds: the provider's raw, variably-shaped news items for a ticker
//!
//! Nothing here is persisted or cached. Every call goes to the provider.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   Core services  |  (formatting, normalization, fallbacks)
//! +------------------+
//!          |
//!          v
//! +--------------------+
//! | MarketDataProvider |  (trait, one impl per provider)
//! +--------------------+
//!          |
//!          v
//! +------------------+
//! |  YahooProvider   |  (chart + search endpoints)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`FastQuote`] - Last price and previous close for a symbol
//! - [`MarketDataProvider`] - Provider abstraction
//! - [`errors::MarketDataError`] - Cause-specific provider failures

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{Currency, FastQuote, ProviderId, RawNewsFeed};
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;
