use crate::registry::AliasConfig;
use crate::types::FetchConfig;
use std::env;
use std::path::PathBuf;

/// Runtime configuration, resolved from environment variables with defaults
/// suitable for running from the repository root.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub registry_path: PathBuf,
    pub output_path: PathBuf,
    pub recommendations_path: PathBuf,
    pub default_days_filter: u32,
    pub max_entries_per_source: usize,
    pub fetch: FetchConfig,
    pub alias: AliasConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let data_dir = PathBuf::from(env_or("NEWSSTAND_DATA_DIR", "data"));

        let registry_path = env::var("NEWSSTAND_FEEDS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("feeds.json"));

        let mut alias = AliasConfig::default();
        if let Ok(base) = env::var("NEWSSTAND_GATEWAY_BASE") {
            alias.gateway_base = base;
        }

        Self {
            registry_path,
            output_path: data_dir.join("rss_feeds.json"),
            recommendations_path: data_dir.join("recommendations.json"),
            default_days_filter: env_parse("NEWSSTAND_DAYS_FILTER", 7),
            max_entries_per_source: env_parse("NEWSSTAND_MAX_ENTRIES", 10),
            fetch: FetchConfig::default(),
            alias,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
