use crate::errors::Result;
use crate::series::series_model::{Observation, SeriesData, SeriesMeta};
use async_trait::async_trait;

/// Trait for series repository operations
///
/// Implementations are blocking; each call checks out and releases its own
/// connection.
pub trait SeriesRepositoryTrait: Send + Sync {
    /// All registry rows, in whatever order the store yields them.
    fn list_series(&self) -> Result<Vec<SeriesMeta>>;
    /// Observations for one slug, ordered by date ascending.
    fn get_observations(&self, slug: &str) -> Result<Vec<Observation>>;
}

/// Trait for series service operations
#[async_trait]
pub trait SeriesServiceTrait: Send + Sync {
    async fn list_series(&self) -> Result<Vec<SeriesMeta>>;
    /// Fails with `Error::SeriesNotFound` when the slug has no observations.
    async fn get_series_data(&self, slug: &str) -> Result<SeriesData>;
}
