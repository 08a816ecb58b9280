//! Configuration module for the cycling events backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_DATA_SOURCE: &str = "./data/events.json";
const DEFAULT_BASE_URL: &str = "https://taiwan-cycling-events.lovable.app";
const DEFAULT_CACHE_TTL_SECS: u64 = crate::loader::DEFAULT_CACHE_TTL.as_secs();

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// File path or http(s) URL of the JSON dataset
    pub data_source: String,
    /// Public origin of the site, without trailing slash
    pub base_url: String,
    /// How long a loaded dataset is served without re-reading the source
    pub cache_ttl: Duration,
    /// Directory that receives sitemap.xml and robots.txt at startup
    pub output_dir: Option<PathBuf>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Rejected values, reported once logging is initialised
    pub warnings: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let mut warnings = Vec::new();

        let data_source =
            env::var("CYCLING_DATA_SOURCE").unwrap_or_else(|_| DEFAULT_DATA_SOURCE.to_string());

        let base_url = env::var("CYCLING_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let cache_ttl = match env::var("CYCLING_CACHE_TTL_SECS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warnings.push(format!(
                    "Invalid CYCLING_CACHE_TTL_SECS {:?}, using default of {}s",
                    raw, DEFAULT_CACHE_TTL_SECS
                ));
                DEFAULT_CACHE_TTL_SECS
            }),
            Err(_) => DEFAULT_CACHE_TTL_SECS,
        };

        let output_dir = env::var("CYCLING_OUTPUT_DIR").ok().map(PathBuf::from);

        let bind_addr = env::var("CYCLING_BIND_ADDR")
            .ok()
            .and_then(|raw| match raw.parse() {
                Ok(addr) => Some(addr),
                Err(_) => {
                    warnings.push(format!(
                        "Invalid CYCLING_BIND_ADDR {:?}, using default {}",
                        raw,
                        default_bind_addr()
                    ));
                    None
                }
            })
            .unwrap_or_else(default_bind_addr);

        let log_level = env::var("CYCLING_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            data_source,
            base_url,
            cache_ttl: Duration::from_secs(cache_ttl),
            output_dir,
            bind_addr,
            log_level,
            warnings,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

    const VARS: [&str; 6] = [
        "CYCLING_DATA_SOURCE",
        "CYCLING_BASE_URL",
        "CYCLING_CACHE_TTL_SECS",
        "CYCLING_OUTPUT_DIR",
        "CYCLING_BIND_ADDR",
        "CYCLING_LOG_LEVEL",
    ];

    // Both scenarios live in one test since they share process environment.
    #[test]
    fn test_config_from_env() {
        for var in VARS {
            env::remove_var(var);
        }

        let config = Config::from_env();

        assert_eq!(config.data_source, DEFAULT_DATA_SOURCE);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
        assert!(config.output_dir.is_none());
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.log_level, "info");
        assert!(config.warnings.is_empty());

        env::set_var("CYCLING_BASE_URL", "https://example.org/");
        env::set_var("CYCLING_CACHE_TTL_SECS", "not-a-number");
        env::set_var("CYCLING_BIND_ADDR", "nowhere");
        env::set_var("CYCLING_OUTPUT_DIR", "/tmp/site");

        let config = Config::from_env();

        assert_eq!(config.base_url, "https://example.org");
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/site")));
        assert_eq!(config.warnings.len(), 2);
        assert!(config.warnings[0].contains("CYCLING_CACHE_TTL_SECS"));
        assert!(config.warnings[0].contains("not-a-number"));
        assert!(config.warnings[1].contains("CYCLING_BIND_ADDR"));
        assert!(config.warnings[1].contains("nowhere"));

        for var in VARS {
            env::remove_var(var);
        }
    }
}
