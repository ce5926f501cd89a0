use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use macrodata_core::{
    news::{NewsService, NewsServiceTrait},
    quotes::{QuoteService, QuoteServiceTrait},
    series::{SeriesService, SeriesServiceTrait},
};
use macrodata_market_data::{MarketDataProvider, YahooProvider};
use macrodata_storage_postgres::{create_pool, redact_database_url, series::SeriesRepository};

pub struct AppState {
    pub series_service: Arc<dyn SeriesServiceTrait>,
    pub quote_service: Arc<dyn QuoteServiceTrait>,
    pub news_service: Arc<dyn NewsServiceTrait>,
    /// Upper bound for one handler; past it the route's fallback payload is served.
    pub request_timeout: Duration,
}

pub fn init_tracing() {
    let log_format = std::env::var("MACRO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Wire repositories, the market data provider and services.
///
/// Nothing here touches the network: the pool connects on first use.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    tracing::info!(
        "Database in use: {}",
        redact_database_url(&config.database_url)
    );
    let pool = create_pool(&config.database_url, config.db_pool_size)?;
    let series_repository = Arc::new(SeriesRepository::new(pool));
    let series_service = Arc::new(SeriesService::new(series_repository));

    let provider: Arc<dyn MarketDataProvider> = Arc::new(YahooProvider::new()?);
    let quote_service = Arc::new(QuoteService::new(provider.clone()));
    let news_service = Arc::new(NewsService::new(provider, config.news_symbol.clone()));
    tracing::info!("News feed symbol: {}", news_service.symbol());

    Ok(Arc::new(AppState {
        series_service,
        quote_service,
        news_service,
        request_timeout: config.request_timeout,
    }))
}
