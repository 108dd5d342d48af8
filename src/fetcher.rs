use crate::types::{Error, FetchConfig, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Retrieves raw feed content over HTTP. One attempt per source per run;
/// recovery from transient outages is the next scheduled run's job.
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Self {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Fetch the raw bytes of one feed. Network failure, timeout, a
    /// non-success status, or an oversized body all map to [`Error::Fetch`]
    /// carrying the source name; the aggregator downgrades that to an empty
    /// entry list.
    pub async fn fetch(&self, source: &str, url: &str) -> Result<Vec<u8>> {
        debug!("Fetching feed for \"{}\": {}", source, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Fetch {
                source: source.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch {
                source: source.to_string(),
                reason: format!(
                    "HTTP {}: {}",
                    status,
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            });
        }

        if let Some(content_length) = response.content_length() {
            let size_mb = content_length as usize / (1024 * 1024);
            if size_mb > self.config.max_feed_size_mb {
                return Err(Error::Fetch {
                    source: source.to_string(),
                    reason: format!("feed too large: {}MB", size_mb),
                });
            }
        }

        let body = response.bytes().await.map_err(|e| Error::Fetch {
            source: source.to_string(),
            reason: e.to_string(),
        })?;

        debug!("Fetched {} bytes for \"{}\"", body.len(), source);
        Ok(body.to_vec())
    }
}
