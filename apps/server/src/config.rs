use std::{net::SocketAddr, time::Duration};

use macrodata_core::constants::DEFAULT_NEWS_SYMBOL;
use macrodata_storage_postgres::resolve_database_url;

pub struct Config {
    pub listen_addr: SocketAddr,
    /// Already resolved: canonical scheme, TLS requested.
    pub database_url: String,
    pub db_pool_size: u32,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub news_symbol: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("MACRO_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid MACRO_LISTEN_ADDR");
        let database_url = resolve_database_url(std::env::var("POSTGRES_URL").ok().as_deref());
        let db_pool_size: u32 = std::env::var("MACRO_DB_POOL_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|size| *size > 0)
            .unwrap_or(8);
        let cors_allow = parse_origins(
            &std::env::var("MACRO_CORS_ALLOW_ORIGINS").unwrap_or_else(|_| "*".into()),
        );
        let timeout_ms: u64 = std::env::var("MACRO_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let news_symbol = std::env::var("MACRO_NEWS_SYMBOL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_NEWS_SYMBOL.to_string());
        Self {
            listen_addr,
            database_url,
            db_pool_size,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            news_symbol,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(" https://a.example , ,https://b.example"),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert_eq!(parse_origins("*"), vec!["*".to_string()]);
    }
}
