use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use macrodata_core::quotes::QuoteDisplay;

use crate::{main_lib::AppState, models::QuoteResponse};

/// Latest price and daily change for a ticker. Never fails: unknown symbols,
/// provider outages and slow lookups yield the placeholder quote.
#[utoipa::path(
    get,
    path = "/api/market/{symbol}",
    params(("symbol" = String, Path, description = "Provider ticker, e.g. `^GSPC` or `GC=F`")),
    responses((status = 200, description = "Display-ready quote", body = QuoteResponse))
)]
pub async fn get_market_quote(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<QuoteResponse> {
    let lookup = state.quote_service.get_quote_display(&symbol);
    let display = match tokio::time::timeout(state.request_timeout, lookup).await {
        Ok(display) => display,
        Err(_) => {
            tracing::warn!(
                "Market quote for {} timed out after {:?}",
                symbol,
                state.request_timeout
            );
            QuoteDisplay::placeholder()
        }
    };
    Json(QuoteResponse::from(display))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/market/{symbol}", get(get_market_quote))
}
