use async_trait::async_trait;
use log::{debug, warn};
use macrodata_market_data::MarketDataProvider;
use std::sync::Arc;

use super::news_model::NewsItem;
use super::news_normalizer::normalize_feed;
use super::news_traits::NewsServiceTrait;
use crate::constants::NEWS_FETCH_COUNT;
use crate::errors::Result;

/// Headlines for one fixed ticker, normalized to [`NewsItem`].
pub struct NewsService {
    provider: Arc<dyn MarketDataProvider>,
    symbol: String,
}

impl NewsService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, symbol: impl Into<String>) -> Self {
        Self {
            provider,
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Fetch and normalize the feed, keeping the failure cause.
    pub async fn fetch_news(&self) -> Result<Vec<NewsItem>> {
        let feed = self
            .provider
            .get_news(&self.symbol, NEWS_FETCH_COUNT)
            .await?;
        let received = feed.items.len();
        let items = normalize_feed(feed.items);
        debug!(
            "Normalized {} of {} news items for {}",
            items.len(),
            received,
            self.symbol
        );
        Ok(items)
    }
}

#[async_trait]
impl NewsServiceTrait for NewsService {
    async fn get_latest_news(&self) -> Vec<NewsItem> {
        match self.fetch_news().await {
            Ok(items) => items,
            Err(e) => {
                warn!("News error for {}: {}", self.symbol, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use macrodata_market_data::{FastQuote, MarketDataError, RawNewsFeed};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    struct MockNewsProvider {
        items: Option<Vec<Value>>,
        requests: Mutex<Vec<(String, usize)>>,
    }

    impl MockNewsProvider {
        fn new(items: Option<Vec<Value>>) -> Self {
            Self {
                items,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl MarketDataProvider for MockNewsProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn get_fast_quote(
            &self,
            symbol: &str,
        ) -> std::result::Result<FastQuote, MarketDataError> {
            Err(MarketDataError::SymbolNotFound(symbol.to_string()))
        }

        async fn get_news(
            &self,
            symbol: &str,
            count: usize,
        ) -> std::result::Result<RawNewsFeed, MarketDataError> {
            self.requests
                .lock()
                .unwrap()
                .push((symbol.to_string(), count));
            match &self.items {
                Some(items) => Ok(RawNewsFeed::new(symbol, items.clone())),
                None => Err(MarketDataError::Timeout {
                    provider: "MOCK".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_feed_is_normalized() {
        let provider = Arc::new(MockNewsProvider::new(Some(vec![
            json!({"title": "A", "link": "https://a", "publisher": "AP", "providerPublishTime": 10}),
            json!({"title": "no link"}),
            json!({"content": {"title": "B", "canonicalUrl": {"url": "https://b"}}}),
        ])));
        let service = NewsService::new(provider.clone(), "SPY");

        let items = service.get_latest_news().await;
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(
            *provider.requests.lock().unwrap(),
            vec![("SPY".to_string(), NEWS_FETCH_COUNT)]
        );
    }

    #[tokio::test]
    async fn test_provider_failure_yields_empty_list() {
        let service = NewsService::new(Arc::new(MockNewsProvider::new(None)), "SPY");
        assert!(service.get_latest_news().await.is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_cause_is_kept_internally() {
        let service = NewsService::new(Arc::new(MockNewsProvider::new(None)), "SPY");
        let err = service.fetch_news().await.unwrap_err();
        assert!(matches!(err, Error::MarketData(MarketDataError::Timeout { .. })));
    }

    #[tokio::test]
    async fn test_fifteen_items_capped_at_ten() {
        let items: Vec<Value> = (0..15)
            .map(|i| json!({"title": format!("t{}", i), "link": format!("https://x/{}", i)}))
            .collect();
        let service = NewsService::new(Arc::new(MockNewsProvider::new(Some(items))), "SPY");

        let news = service.get_latest_news().await;
        assert_eq!(news.len(), 10);
        assert_eq!(news.first().unwrap().title, "t0");
        assert_eq!(news.last().unwrap().title, "t9");
    }
}
