use async_trait::async_trait;

use super::quotes_model::QuoteDisplay;

/// Trait for live quote operations
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Never fails: any provider or computation failure yields
    /// [`QuoteDisplay::placeholder`].
    async fn get_quote_display(&self, symbol: &str) -> QuoteDisplay;
}
