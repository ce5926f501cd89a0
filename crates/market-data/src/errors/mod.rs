//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while talking to a market data provider.
///
/// Callers in this workspace never surface these to HTTP clients; they are
/// kept distinct so that logs say *why* a sentinel payload was returned.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider answered, but a required field was absent or unusable.
    #[error("Missing field '{field}' for {symbol}")]
    MissingField {
        /// Symbol the request was made for
        symbol: String,
        /// Name of the absent field
        field: String,
    },

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The operation is not implemented by this provider.
    #[error("Operation '{operation}' not supported by {provider}")]
    NotSupported {
        /// The operation that was requested
        operation: String,
        /// The provider that was asked
        provider: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Maps a transport error to the most specific variant available.
    pub fn from_transport(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else {
            Self::Network(err)
        }
    }

    /// Maps a non-success HTTP status from the provider.
    pub fn from_status(provider: &str, symbol: &str, status: reqwest::StatusCode) -> Self {
        match status {
            reqwest::StatusCode::NOT_FOUND => Self::SymbolNotFound(symbol.to_string()),
            reqwest::StatusCode::TOO_MANY_REQUESTS => Self::RateLimited {
                provider: provider.to_string(),
            },
            other => Self::ProviderError {
                provider: provider.to_string(),
                message: format!("HTTP {}", other),
            },
        }
    }
}
