//! News domain models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Publication time of a news item.
///
/// Timestamps that could not be parsed are passed through as the raw string
/// rather than failing the whole feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NewsTime {
    /// Unix seconds
    Timestamp(i64),
    /// Unparseable upstream value, verbatim
    Raw(String),
}

/// A headline in the single shape served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub publisher: String,
    pub link: String,
    pub time: Option<NewsTime>,
}

/// A provider news item, classified by layout.
#[derive(Debug, Clone, PartialEq)]
pub enum RawNewsItem {
    /// Current layout: every field sits under a `content` object.
    Nested(Map<String, Value>),
    /// Legacy layout: flat fields on the item itself.
    Flat(Map<String, Value>),
}

impl RawNewsItem {
    /// Classify a raw provider value. Non-object values are not news items.
    ///
    /// A `content` key that is not an object does not make the item nested.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(mut item) => match item.remove("content") {
                Some(Value::Object(content)) => Some(Self::Nested(content)),
                Some(other) => {
                    item.insert("content".to_string(), other);
                    Some(Self::Flat(item))
                }
                None => Some(Self::Flat(item)),
            },
            _ => None,
        }
    }

    /// The object fields are read from.
    pub fn source(&self) -> &Map<String, Value> {
        match self {
            Self::Nested(content) => content,
            Self::Flat(item) => item,
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested(_))
    }
}
