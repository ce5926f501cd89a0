//! Yahoo Finance API response models.
//!
//! Only the fields the service reads are modeled; everything else in the
//! payloads is ignored by serde.

use serde::Deserialize;
use serde_json::Value;

/// Response wrapper for the v8 chart API
#[derive(Debug, Deserialize)]
pub struct YahooChartResponse {
    pub chart: YahooChart,
}

/// Chart container. Yahoo sets `result: null` and fills `error` for unknown symbols.
#[derive(Debug, Deserialize)]
pub struct YahooChart {
    #[serde(default)]
    pub result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    pub error: Option<YahooApiError>,
}

/// Individual chart result
#[derive(Debug, Deserialize)]
pub struct YahooChartResult {
    pub meta: YahooChartMeta,
    // Note: timestamp/indicators exist but the fast path reads meta only
}

/// Chart metadata, which carries the fast-path prices
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooChartMeta {
    pub currency: Option<String>,
    pub regular_market_price: Option<f64>,
    pub chart_previous_close: Option<f64>,
    pub previous_close: Option<f64>,
    pub regular_market_time: Option<i64>,
}

impl YahooChartMeta {
    /// Previous close, preferring the chart-range value Yahoo always sets.
    pub fn previous_close(&self) -> Option<f64> {
        self.chart_previous_close.or(self.previous_close)
    }
}

/// Error object embedded in Yahoo API responses
#[derive(Debug, Deserialize)]
pub struct YahooApiError {
    pub code: Option<String>,
    pub description: Option<String>,
}

/// Response from the v1 search API. Only the news list is used.
#[derive(Debug, Deserialize)]
pub struct YahooSearchResponse {
    #[serde(default)]
    pub news: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chart_meta() {
        let body = r#"{
            "chart": {
                "result": [{
                    "meta": {
                        "currency": "USD",
                        "symbol": "SPY",
                        "regularMarketPrice": 512.34,
                        "chartPreviousClose": 508.0,
                        "regularMarketTime": 1704067200
                    },
                    "timestamp": [1704067200],
                    "indicators": {"quote": [{}]}
                }],
                "error": null
            }
        }"#;
        let response: YahooChartResponse = serde_json::from_str(body).unwrap();
        let results = response.chart.result.unwrap();
        let meta = &results[0].meta;
        assert_eq!(meta.currency.as_deref(), Some("USD"));
        assert_eq!(meta.regular_market_price, Some(512.34));
        assert_eq!(meta.previous_close(), Some(508.0));
    }

    #[test]
    fn test_previous_close_falls_back() {
        let body = r#"{"regularMarketPrice": 10.0, "previousClose": 9.5}"#;
        let meta: YahooChartMeta = serde_json::from_str(body).unwrap();
        assert_eq!(meta.previous_close(), Some(9.5));
    }

    #[test]
    fn test_parse_chart_error() {
        let body = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
            }
        }"#;
        let response: YahooChartResponse = serde_json::from_str(body).unwrap();
        assert!(response.chart.result.is_none());
        assert_eq!(
            response.chart.error.unwrap().code.as_deref(),
            Some("Not Found")
        );
    }

    #[test]
    fn test_parse_search_news_keeps_raw_items() {
        let body = r#"{
            "quotes": [],
            "news": [
                {"title": "A", "publisher": "Reuters", "link": "https://a", "providerPublishTime": 1704067200},
                {"content": {"title": "B"}}
            ]
        }"#;
        let response: YahooSearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.news.len(), 2);
        assert_eq!(response.news[1]["content"]["title"], "B");
    }

    #[test]
    fn test_parse_search_without_news() {
        let response: YahooSearchResponse = serde_json::from_str(r#"{"quotes": []}"#).unwrap();
        assert!(response.news.is_empty());
    }
}
