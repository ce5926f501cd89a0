//! Series domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::OBSERVATION_DATE_FORMAT;

/// Registry entry describing one macroeconomic series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMeta {
    pub slug: String,
    pub title: String,
    pub frequency: String,
    pub units: String,
}

/// One dated value of a series, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub series_slug: String,
    pub date: NaiveDate,
    pub value: f64,
}

/// One dated value of a series, as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: String,
    pub value: f64,
}

impl From<Observation> for SeriesPoint {
    fn from(observation: Observation) -> Self {
        Self {
            date: observation
                .date
                .format(OBSERVATION_DATE_FORMAT)
                .to_string(),
            value: observation.value,
        }
    }
}

/// All observations of one series, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    pub slug: String,
    pub count: usize,
    pub data: Vec<SeriesPoint>,
}

impl SeriesData {
    pub fn new(slug: impl Into<String>, observations: Vec<Observation>) -> Self {
        let data: Vec<SeriesPoint> = observations.into_iter().map(SeriesPoint::from).collect();
        Self {
            slug: slug.into(),
            count: data.len(),
            data,
        }
    }
}
