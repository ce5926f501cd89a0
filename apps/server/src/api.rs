mod market;
mod news;
mod series;

use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{
        ErrorBody, NewsItem, NewsResponse, NotFoundBody, QuoteResponse, SeriesDataResponse,
        SeriesListResponse, SeriesMeta, SeriesPoint, StatusResponse,
    },
};

const STATUS_MESSAGE: &str = "Macro Data API is connected!";

#[utoipa::path(get, path = "/api", responses((status = 200, body = StatusResponse)))]
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online".to_string(),
        message: STATUS_MESSAGE.to_string(),
    })
}

#[utoipa::path(get, path = "/api/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[utoipa::path(get, path = "/api/readyz", responses((status = 200, description = "Ready")))]
pub async fn readyz() -> &'static str {
    "ok"
}

#[derive(OpenApi)]
#[openapi(
    paths(
        root,
        healthz,
        readyz,
        series::list_series,
        series::get_series_data,
        market::get_market_quote,
        news::get_news
    ),
    components(schemas(
        StatusResponse,
        SeriesMeta,
        SeriesListResponse,
        SeriesPoint,
        SeriesDataResponse,
        QuoteResponse,
        NewsItem,
        NewsResponse,
        ErrorBody,
        NotFoundBody
    )),
    tags((name = "macrodata"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.cors_allow.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                None
            }
        })
        .collect::<Vec<_>>();
    cors.allow_origin(origins)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    Router::new()
        .route("/api", get(root))
        .route("/api/healthz", get(healthz))
        .route("/api/readyz", get(readyz))
        .merge(series::router())
        .merge(market::router())
        .merge(news::router())
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
}
