use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use macrodata_core::errors::Error as CoreError;
use thiserror::Error;

use crate::models::{ErrorBody, NotFoundBody};

pub const SERIES_NOT_FOUND_DETAIL: &str = "Series not found";

/// Failures surfaced by the series endpoints.
///
/// Clients written against this API read `{error}` bodies on a 200, so store
/// failures keep that shape. Only an unknown series gets a real 404.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Core(CoreError::SeriesNotFound(slug)) => {
                tracing::debug!("Series '{}' has no observations", slug);
                let body = Json(NotFoundBody {
                    detail: SERIES_NOT_FOUND_DETAIL.to_string(),
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            other => {
                tracing::error!("Series request failed: {}", other);
                let body = Json(ErrorBody {
                    error: other.to_string(),
                });
                (StatusCode::OK, body).into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Run a service call under the request deadline.
pub async fn within_deadline<T, F>(limit: Duration, call: F) -> ApiResult<T>
where
    F: std::future::Future<Output = macrodata_core::Result<T>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(ApiError::Timeout(limit)),
    }
}
