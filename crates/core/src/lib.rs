//! Macro Data Core - Domain entities, services, and traits.
//!
//! This crate contains the service logic behind the Macro Data API.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-postgres` crate.

pub mod constants;
pub mod errors;
pub mod news;
pub mod quotes;
pub mod series;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
