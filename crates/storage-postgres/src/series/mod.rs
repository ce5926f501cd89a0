//! PostgreSQL storage for the series registry and observations.

mod model;
mod repository;

pub use model::{ObservationDB, SeriesMetaDB};
pub use repository::SeriesRepository;
