use crate::types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};
use url::Url;

/// One named feed to fetch. The URL may be a direct HTTP(S) address or an
/// alias in the gateway scheme (see [`AliasConfig`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSpec {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSpec {
    #[serde(rename = "groupName")]
    pub group_name: String,
    pub sources: Vec<SourceSpec>,
}

/// Static registry of groups and sources, supplied as an immutable value to
/// the aggregator at invocation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    pub groups: Vec<GroupSpec>,
}

impl Registry {
    /// Compiled-in default registry, used when no registry file exists.
    pub fn builtin() -> Self {
        let json = include_str!("builtin_feeds.json");
        serde_json::from_str(json).expect("builtin registry is well-formed")
    }

    /// Load the registry from a JSON file. Any problem here is run-level:
    /// an unreadable registry aborts the run before anything is fetched.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read registry {}: {}", path.display(), e))
        })?;
        let registry: Registry = serde_json::from_str(&raw).map_err(|e| {
            Error::Config(format!("malformed registry {}: {}", path.display(), e))
        })?;
        registry.validate()?;
        Ok(registry)
    }

    /// Registry file when present, builtin set otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            info!("Loading feed registry from {}", path.display());
            Self::from_path(path)
        } else {
            debug!("No registry file at {}, using builtin feeds", path.display());
            Ok(Self::builtin())
        }
    }

    /// Source names are used as stable identifiers for per-source pages, so
    /// they must be unique within their group. Non-HTTP non-alias URLs only
    /// get a warning: expansion is string-level and bad URLs fail at fetch
    /// time.
    fn validate(&self) -> Result<()> {
        for group in &self.groups {
            let mut seen = HashSet::new();
            for source in &group.sources {
                if !seen.insert(source.name.as_str()) {
                    return Err(Error::Config(format!(
                        "duplicate source name \"{}\" in group \"{}\"",
                        source.name, group.group_name
                    )));
                }
                if !looks_like_alias(&source.url) && !is_http_url(&source.url) {
                    warn!(
                        "Source \"{}\" has a non-HTTP URL: {}",
                        source.name, source.url
                    );
                }
            }
        }
        Ok(())
    }

    pub fn source_count(&self) -> usize {
        self.groups.iter().map(|g| g.sources.len()).sum()
    }
}

fn is_http_url(url_str: &str) -> bool {
    match Url::parse(url_str) {
        Ok(url) => url.scheme() == "http" || url.scheme() == "https",
        Err(_) => false,
    }
}

fn looks_like_alias(url_str: &str) -> bool {
    url_str
        .split_once("://")
        .map(|(scheme, _)| scheme != "http" && scheme != "https")
        .unwrap_or(false)
}

/// Expansion of shorthand gateway URLs. `scheme://namespace/path` becomes
/// `<gateway_base>/namespace/path`; anything else passes through unchanged,
/// so expansion is idempotent. Pure string transformation: a malformed alias
/// is not an error here, the resulting URL fails at fetch time.
#[derive(Debug, Clone)]
pub struct AliasConfig {
    pub scheme: String,
    pub gateway_base: String,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            scheme: "rsshub".to_string(),
            gateway_base: "https://rsshub.app".to_string(),
        }
    }
}

impl AliasConfig {
    pub fn expand(&self, url: &str) -> String {
        let prefix = format!("{}://", self.scheme);
        match url.strip_prefix(prefix.as_str()) {
            Some(rest) => format!("{}/{}", self.gateway_base.trim_end_matches('/'), rest),
            None => url.to_string(),
        }
    }
}
