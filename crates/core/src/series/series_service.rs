use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use super::series_model::{SeriesData, SeriesMeta};
use super::series_traits::{SeriesRepositoryTrait, SeriesServiceTrait};
use crate::errors::{Error, Result};

/// Read-only access to the series registry and its observations.
///
/// Repository calls block on the database, so they run on tokio's blocking pool.
pub struct SeriesService {
    repository: Arc<dyn SeriesRepositoryTrait>,
}

impl SeriesService {
    pub fn new(repository: Arc<dyn SeriesRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SeriesServiceTrait for SeriesService {
    async fn list_series(&self) -> Result<Vec<SeriesMeta>> {
        let repository = self.repository.clone();
        let series = tokio::task::spawn_blocking(move || repository.list_series()).await??;
        debug!("Loaded {} series from registry", series.len());
        Ok(series)
    }

    async fn get_series_data(&self, slug: &str) -> Result<SeriesData> {
        let repository = self.repository.clone();
        let owned_slug = slug.to_string();
        let observations =
            tokio::task::spawn_blocking(move || repository.get_observations(&owned_slug))
                .await??;

        if observations.is_empty() {
            warn!("No observations found for series '{}'", slug);
            return Err(Error::SeriesNotFound(slug.to_string()));
        }

        Ok(SeriesData::new(slug, observations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DatabaseError;
    use crate::series::{Observation, SeriesPoint};
    use chrono::NaiveDate;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockSeriesRepository {
        series: Vec<SeriesMeta>,
        observations: Vec<Observation>,
        fail: bool,
        calls: Mutex<Vec<String>>,
    }

    impl SeriesRepositoryTrait for MockSeriesRepository {
        fn list_series(&self) -> Result<Vec<SeriesMeta>> {
            self.calls.lock().unwrap().push("list".to_string());
            if self.fail {
                return Err(DatabaseError::ConnectionFailed("connection refused".into()).into());
            }
            Ok(self.series.clone())
        }

        fn get_observations(&self, slug: &str) -> Result<Vec<Observation>> {
            self.calls.lock().unwrap().push(format!("observations:{}", slug));
            if self.fail {
                return Err(DatabaseError::QueryFailed("relation does not exist".into()).into());
            }
            let mut rows: Vec<Observation> = self
                .observations
                .iter()
                .filter(|o| o.series_slug == slug)
                .cloned()
                .collect();
            rows.sort_by_key(|o| o.date);
            Ok(rows)
        }
    }

    fn meta(slug: &str) -> SeriesMeta {
        SeriesMeta {
            slug: slug.to_string(),
            title: format!("{} title", slug),
            frequency: "Monthly".to_string(),
            units: "Percent".to_string(),
        }
    }

    fn obs(slug: &str, y: i32, m: u32, d: u32, value: f64) -> Observation {
        Observation {
            series_slug: slug.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            value,
        }
    }

    #[tokio::test]
    async fn test_list_series_preserves_repository_order() {
        let repo = MockSeriesRepository {
            series: vec![meta("unemployment_rate"), meta("real_gdp"), meta("cpi_headline")],
            ..Default::default()
        };
        let service = SeriesService::new(Arc::new(repo));

        let series = service.list_series().await.unwrap();
        let slugs: Vec<&str> = series.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["unemployment_rate", "real_gdp", "cpi_headline"]);
    }

    #[tokio::test]
    async fn test_list_series_propagates_database_error() {
        let repo = MockSeriesRepository {
            fail: true,
            ..Default::default()
        };
        let service = SeriesService::new(Arc::new(repo));

        let err = service.list_series().await.unwrap_err();
        assert!(matches!(err, Error::Database(DatabaseError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn test_get_series_data_counts_and_orders() {
        let repo = MockSeriesRepository {
            observations: vec![
                obs("fed_funds", 2024, 3, 1, 5.33),
                obs("fed_funds", 2024, 1, 1, 5.33),
                obs("real_gdp", 2024, 1, 1, 22_000.0),
                obs("fed_funds", 2024, 2, 1, 5.33),
            ],
            ..Default::default()
        };
        let service = SeriesService::new(Arc::new(repo));

        let data = service.get_series_data("fed_funds").await.unwrap();
        assert_eq!(data.slug, "fed_funds");
        assert_eq!(data.count, 3);
        assert_eq!(data.data.len(), 3);
        let dates: Vec<&str> = data.data.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-02-01", "2024-03-01"]);
    }

    #[tokio::test]
    async fn test_get_series_data_empty_is_not_found() {
        let repo = MockSeriesRepository {
            observations: vec![obs("real_gdp", 2024, 1, 1, 1.0)],
            ..Default::default()
        };
        let service = SeriesService::new(Arc::new(repo));

        let err = service.get_series_data("missing").await.unwrap_err();
        assert!(matches!(err, Error::SeriesNotFound(ref s) if s == "missing"));
    }

    #[tokio::test]
    async fn test_get_series_data_database_error_is_not_not_found() {
        let repo = MockSeriesRepository {
            fail: true,
            ..Default::default()
        };
        let service = SeriesService::new(Arc::new(repo));

        let err = service.get_series_data("real_gdp").await.unwrap_err();
        assert!(!err.is_not_found());
        assert!(matches!(err, Error::Database(DatabaseError::QueryFailed(_))));
    }

    #[tokio::test]
    async fn test_each_call_hits_repository() {
        let repo = Arc::new(MockSeriesRepository {
            observations: vec![obs("real_gdp", 2024, 1, 1, 1.0)],
            ..Default::default()
        });
        let service = SeriesService::new(repo.clone());

        let first = service.get_series_data("real_gdp").await.unwrap();
        let second = service.get_series_data("real_gdp").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(repo.calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_series_point_date_is_text() {
        let point = SeriesPoint::from(obs("real_gdp", 2023, 7, 1, 27_610.128));
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["date"], "2023-07-01");
        assert_eq!(json["value"], 27_610.128);
    }
}
