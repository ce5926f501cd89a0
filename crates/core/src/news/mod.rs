//! News module - headline models, normalization, and service.

mod news_model;
mod news_normalizer;
mod news_service;
mod news_traits;

pub use news_model::{NewsItem, NewsTime, RawNewsItem};
pub use news_normalizer::{normalize_feed, normalize_item, parse_iso_timestamp};
pub use news_service::NewsService;
pub use news_traits::NewsServiceTrait;
