use std::sync::Arc;

use diesel::pg::Pg;
use diesel::prelude::*;
use log::debug;

use macrodata_core::series::{Observation, SeriesMeta, SeriesRepositoryTrait};
use macrodata_core::Result;

use super::model::{ObservationDB, SeriesMetaDB};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::{observations, series_registry};

/// Read-only repository over the externally managed series tables.
pub struct SeriesRepository {
    pool: Arc<DbPool>,
}

impl SeriesRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SeriesRepository { pool }
    }
}

/// Observations of one series, oldest first. The slug is always bound.
fn observations_for_slug(slug: &str) -> observations::BoxedQuery<'_, Pg> {
    observations::table
        .filter(observations::series_slug.eq(slug))
        .order(observations::date.asc())
        .into_boxed()
}

impl SeriesRepositoryTrait for SeriesRepository {
    fn list_series(&self) -> Result<Vec<SeriesMeta>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = series_registry::table
            .select(SeriesMetaDB::as_select())
            .load::<SeriesMetaDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(SeriesMeta::from).collect())
    }

    fn get_observations(&self, slug: &str) -> Result<Vec<Observation>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = observations_for_slug(slug)
            .select(ObservationDB::as_select())
            .load::<ObservationDB>(&mut conn)
            .map_err(StorageError::from)?;
        debug!("Loaded {} observations for '{}'", rows.len(), slug);
        Ok(rows.into_iter().map(Observation::from).collect())
    }
}
