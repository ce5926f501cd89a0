//! Live quote module.
//!
//! - [`quotes_model`] - Display payload for a live quote
//! - [`quotes_format`] - Number formatting for prices and changes
//! - [`quotes_service`] - Provider-backed service with placeholder fallback
//!
//! Quotes are never stored; every request goes to the market data provider.

mod quotes_format;
mod quotes_model;
mod quotes_service;
mod quotes_traits;

pub use quotes_format::{change_percent, format_change, format_price};
pub use quotes_model::QuoteDisplay;
pub use quotes_service::QuoteService;
pub use quotes_traits::QuoteServiceTrait;
