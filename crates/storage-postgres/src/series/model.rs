//! Database models for series.

use chrono::NaiveDate;
use diesel::prelude::*;

use macrodata_core::series::{Observation, SeriesMeta};

/// Row of `series_registry`
#[derive(Queryable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::series_registry)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SeriesMetaDB {
    pub slug: String,
    pub title: String,
    pub frequency: String,
    pub units: String,
}

/// Row of `observations`
#[derive(Queryable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::observations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ObservationDB {
    pub series_slug: String,
    pub date: NaiveDate,
    pub value: f64,
}

impl From<SeriesMetaDB> for SeriesMeta {
    fn from(db: SeriesMetaDB) -> Self {
        Self {
            slug: db.slug,
            title: db.title,
            frequency: db.frequency,
            units: db.units,
        }
    }
}

impl From<ObservationDB> for Observation {
    fn from(db: ObservationDB) -> Self {
        Self {
            series_slug: db.series_slug,
            date: db.date,
            value: db.value,
        }
    }
}
