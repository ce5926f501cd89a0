//! Series module - domain models, services, and traits.

mod series_model;
mod series_service;
mod series_traits;

pub use series_model::{Observation, SeriesData, SeriesMeta, SeriesPoint};
pub use series_service::SeriesService;
pub use series_traits::{SeriesRepositoryTrait, SeriesServiceTrait};
