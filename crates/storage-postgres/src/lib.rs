//! PostgreSQL storage implementation for the Macro Data API.
//!
//! This crate provides all database-related functionality using Diesel ORM with PostgreSQL.
//! It implements the repository traits defined in `macrodata-core` and contains:
//! - Connection string resolution and connection pooling
//! - Table definitions for the externally managed relations
//! - Repository implementations for series data
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//!
//! ```text
//!          core (domain)
//!                  │
//!                  ▼
//!          storage-postgres (this crate)
//!                  │
//!                  ▼
//!              PostgreSQL
//! ```
//!
//! The schema is owned and migrated elsewhere; this crate only reads.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod series;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, redact_database_url, resolve_database_url, DbConnection,
    DbPool, DEFAULT_DATABASE_URL,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from macrodata-core for convenience
pub use macrodata_core::errors::{DatabaseError, Error, Result};
