//! Market data models
//!
//! - `types` - Type aliases for common identifiers (ProviderId, Currency)
//! - `quote` - Fast-path quote data (FastQuote)
//! - `news` - Raw provider news feed (RawNewsFeed)

mod news;
mod quote;
mod types;

pub use news::RawNewsFeed;
pub use quote::FastQuote;
pub use types::{Currency, ProviderId};
