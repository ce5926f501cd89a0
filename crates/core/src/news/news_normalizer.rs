//! Maps provider news items of either layout onto [`NewsItem`].
//!
//! Field lookup always prefers the nested form and falls back to the flat
//! one, whichever layout the item arrived in:
//!
//! | Field     | Nested form            | Flat form             |
//! |-----------|------------------------|-----------------------|
//! | publisher | `provider.displayName` | `publisher`           |
//! | link      | `canonicalUrl.url`     | `link`                |
//! | time      | `pubDate` (ISO-8601)   | `providerPublishTime` |

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use super::news_model::{NewsItem, NewsTime, RawNewsItem};
use crate::constants::{DEFAULT_NEWS_PUBLISHER, MAX_NEWS_ITEMS};

/// Normalize a raw provider feed.
///
/// Items without both a title and a link are dropped. At most
/// [`MAX_NEWS_ITEMS`] items are kept, in provider order.
pub fn normalize_feed(items: Vec<Value>) -> Vec<NewsItem> {
    items
        .into_iter()
        .filter_map(RawNewsItem::from_value)
        .filter_map(|raw| normalize_item(&raw))
        .take(MAX_NEWS_ITEMS)
        .collect()
}

/// Normalize one classified item; `None` when it lacks a title or link.
pub fn normalize_item(raw: &RawNewsItem) -> Option<NewsItem> {
    match raw {
        RawNewsItem::Nested(content) => normalize_fields(content),
        RawNewsItem::Flat(item) => normalize_fields(item),
    }
}

fn normalize_fields(source: &Map<String, Value>) -> Option<NewsItem> {
    let title = non_empty_str(source.get("title"))?;
    let link = extract_link(source)?;
    Some(NewsItem {
        title: title.to_string(),
        publisher: extract_publisher(source),
        link: link.to_string(),
        time: extract_time(source),
    })
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn nested_str<'a>(source: &'a Map<String, Value>, object: &str, field: &str) -> Option<&'a str> {
    source
        .get(object)
        .and_then(Value::as_object)
        .and_then(|inner| non_empty_str(inner.get(field)))
}

fn extract_publisher(source: &Map<String, Value>) -> String {
    nested_str(source, "provider", "displayName")
        .or_else(|| non_empty_str(source.get("publisher")))
        .unwrap_or(DEFAULT_NEWS_PUBLISHER)
        .to_string()
}

fn extract_link(source: &Map<String, Value>) -> Option<&str> {
    nested_str(source, "canonicalUrl", "url").or_else(|| non_empty_str(source.get("link")))
}

fn extract_time(source: &Map<String, Value>) -> Option<NewsTime> {
    let raw = present(source.get("pubDate")).or_else(|| present(source.get("providerPublishTime")))?;
    match raw {
        Value::String(s) => Some(
            parse_iso_timestamp(s)
                .map(NewsTime::Timestamp)
                .unwrap_or_else(|| NewsTime::Raw(s.clone())),
        ),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .map(NewsTime::Timestamp),
        _ => None,
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

/// Parse an ISO-8601 timestamp into Unix seconds.
///
/// Accepts RFC 3339 (including a literal `Z`), offset-less date-times and
/// bare dates; the latter two are read as UTC.
pub fn parse_iso_timestamp(value: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc().timestamp());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp())
}
