use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{
    main_lib::AppState,
    models::{NewsItem, NewsResponse},
};

#[utoipa::path(
    get,
    path = "/api/news",
    responses((status = 200, description = "Up to ten normalized headlines", body = NewsResponse))
)]
pub async fn get_news(State(state): State<Arc<AppState>>) -> Json<NewsResponse> {
    let items = match tokio::time::timeout(
        state.request_timeout,
        state.news_service.get_latest_news(),
    )
    .await
    {
        Ok(items) => items,
        Err(_) => {
            tracing::warn!("News feed timed out after {:?}", state.request_timeout);
            Vec::new()
        }
    };
    Json(NewsResponse {
        data: items.into_iter().map(NewsItem::from).collect(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/news", get(get_news))
}
