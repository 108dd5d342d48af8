use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One normalized feed item. Immutable once produced; no identity beyond its
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: String,
    /// Empty when the feed omitted a link; entries are kept either way.
    pub link: String,
    #[serde(rename = "pubDate", skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    /// Canonical feed URL after alias expansion.
    pub url: String,
    pub entries: Vec<FeedEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "groupName")]
    pub group_name: String,
    pub sources: Vec<Source>,
}

/// Root aggregate: the single artifact written by the pipeline and the single
/// artifact read by the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedData {
    #[serde(rename = "lastUpdated")]
    pub last_updated: DateTime<Utc>,
    #[serde(rename = "daysFilter")]
    pub days_filter: u32,
    pub groups: Vec<Group>,
}

impl FeedData {
    pub fn source_count(&self) -> usize {
        self.groups.iter().map(|g| g.sources.len()).sum()
    }

    pub fn entry_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|g| &g.sources)
            .map(|s| s.entries.len())
            .sum()
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_redirects: usize,
    pub max_feed_size_mb: usize,
    pub max_concurrent_fetches: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "newsstand/0.1".to_string(),
            timeout_seconds: 30,
            max_redirects: 5,
            max_feed_size_mb: 10,
            max_concurrent_fetches: 8,
        }
    }
}

#[derive(Debug)]
pub enum Error {
    /// Network, timeout, or non-success response for one source. Caught at
    /// the aggregator boundary, never past it.
    Fetch { source: String, reason: String },

    /// Malformed feed content for one source. Caught at the aggregator
    /// boundary, never past it.
    Parse { source: String, reason: String },

    /// Registry, recommendations, or output path unusable. Run-level:
    /// propagates to the invocation boundary.
    Config(String),

    Serialization(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Fetch { source, reason } => {
                write!(f, "fetch failed for {source}: {reason}")
            }
            Error::Parse { source, reason } => {
                write!(f, "feed parse failed for {source}: {reason}")
            }
            Error::Config(msg) => write!(f, "config error: {msg}"),
            Error::Serialization(err) => write!(f, "serialization error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
