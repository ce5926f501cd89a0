use async_trait::async_trait;

use super::news_model::NewsItem;

/// Trait for news feed operations
#[async_trait]
pub trait NewsServiceTrait: Send + Sync {
    /// Never fails: any fetch or decode failure yields an empty list.
    async fn get_latest_news(&self) -> Vec<NewsItem>;
}
