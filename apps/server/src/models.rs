//! Wire shapes of the HTTP API.

use macrodata_core::news::{NewsItem as CoreNewsItem, NewsTime};
use macrodata_core::quotes::QuoteDisplay;
use macrodata_core::series::{
    SeriesData, SeriesMeta as CoreSeriesMeta, SeriesPoint as CoreSeriesPoint,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SeriesMeta {
    pub slug: String,
    pub title: String,
    pub frequency: String,
    pub units: String,
}

impl From<CoreSeriesMeta> for SeriesMeta {
    fn from(s: CoreSeriesMeta) -> Self {
        Self {
            slug: s.slug,
            title: s.title,
            frequency: s.frequency,
            units: s.units,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SeriesListResponse {
    pub data: Vec<SeriesMeta>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub value: f64,
}

impl From<CoreSeriesPoint> for SeriesPoint {
    fn from(p: CoreSeriesPoint) -> Self {
        Self {
            date: p.date,
            value: p.value,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SeriesDataResponse {
    pub slug: String,
    pub count: usize,
    pub data: Vec<SeriesPoint>,
}

impl From<SeriesData> for SeriesDataResponse {
    fn from(d: SeriesData) -> Self {
        Self {
            slug: d.slug,
            count: d.count,
            data: d.data.into_iter().map(SeriesPoint::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct QuoteResponse {
    pub price: String,
    pub change: String,
    pub pos: bool,
}

impl From<QuoteDisplay> for QuoteResponse {
    fn from(q: QuoteDisplay) -> Self {
        Self {
            price: q.price,
            change: q.change,
            pos: q.pos,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub title: String,
    pub publisher: String,
    pub link: String,
    /// Unix seconds, or the upstream string when it could not be parsed.
    #[schema(value_type = Option<Object>)]
    pub time: Option<NewsTime>,
}

impl From<CoreNewsItem> for NewsItem {
    fn from(n: CoreNewsItem) -> Self {
        Self {
            title: n.title,
            publisher: n.publisher,
            link: n.link,
            time: n.time,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct NewsResponse {
    pub data: Vec<NewsItem>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct NotFoundBody {
    pub detail: String,
}
