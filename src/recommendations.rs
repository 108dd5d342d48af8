use crate::types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// One manually curated item. Authored directly by a human, never produced
/// by the feed pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationsData {
    pub recommendations: BTreeMap<String, Vec<Recommendation>>,
}

/// Load the hand-edited recommendations file. An absent file is valid and
/// yields an empty mapping; a present-but-malformed file is a configuration
/// error for the maintainer to fix.
pub fn load(path: &Path) -> Result<RecommendationsData> {
    if !path.exists() {
        debug!("No recommendations file at {}", path.display());
        return Ok(RecommendationsData::default());
    }

    let raw = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "cannot read recommendations {}: {}",
            path.display(),
            e
        ))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        Error::Config(format!(
            "malformed recommendations {}: {}",
            path.display(),
            e
        ))
    })
}
