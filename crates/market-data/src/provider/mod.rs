//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - Concrete provider implementations (Yahoo)
//!
//! Providers translate one request into one HTTP
//! call and map the response into crate models. Fallback payloads and
//! formatting belong to the callers.

mod traits;

pub mod yahoo;

// Re-exports
pub use traits::MarketDataProvider;
