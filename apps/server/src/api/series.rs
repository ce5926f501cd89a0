use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::{
    error::{within_deadline, ApiResult},
    main_lib::AppState,
    models::{SeriesDataResponse, SeriesListResponse, SeriesMeta},
};

/// List every registered series.
#[utoipa::path(
    get,
    path = "/api/series",
    responses(
        (status = 200, description = "Registered series, or `{error}` if the store failed",
            body = SeriesListResponse)
    )
)]
pub async fn list_series(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SeriesListResponse>> {
    let series =
        within_deadline(state.request_timeout, state.series_service.list_series()).await?;
    Ok(Json(SeriesListResponse {
        data: series.into_iter().map(SeriesMeta::from).collect(),
    }))
}

/// All observations of one series, oldest first.
#[utoipa::path(
    get,
    path = "/api/series/{slug}",
    params(("slug" = String, Path, description = "Series identifier")),
    responses(
        (status = 200, description = "Observations, or `{error}` if the store failed",
            body = SeriesDataResponse),
        (status = 404, description = "No observations for this slug",
            body = crate::models::NotFoundBody)
    )
)]
pub async fn get_series_data(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SeriesDataResponse>> {
    let data = within_deadline(
        state.request_timeout,
        state.series_service.get_series_data(&slug),
    )
    .await?;
    Ok(Json(SeriesDataResponse::from(data)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/series", get(list_series))
        .route("/api/series/{slug}", get(get_series_data))
}
