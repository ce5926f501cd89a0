//! Storage-specific error types for PostgreSQL operations.
//!
//! Diesel and r2d2 errors are wrapped here and converted to the
//! database-agnostic errors defined in `macrodata_core`. Repositories convert
//! with `.map_err(StorageError::from)?`, since the orphan rules rule out a
//! direct `From<DieselError> for Error`.

use diesel::result::Error as DieselError;
use macrodata_core::errors::{DatabaseError, Error};
use thiserror::Error;

/// Storage-specific errors that wrap Diesel and r2d2 types.
///
/// These never leave the storage layer; callers see `macrodata_core::Error`.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Checking a connection out of the pool failed. With a lazily built
    /// pool this is where an unreachable database surfaces.
    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::PoolError(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::QueryFailed(e) => {
                Error::Database(DatabaseError::QueryFailed(e.to_string()))
            }
        }
    }
}
