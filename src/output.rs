use crate::types::{Error, FeedData, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Write the snapshot as pretty JSON. The document goes to a sibling temp
/// file first and is renamed into place, so a crash mid-write leaves the
/// previous run's output untouched.
pub fn write_feed_data(path: &Path, data: &FeedData) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!(
                    "cannot create output directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let json = serde_json::to_string_pretty(data)?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, &json)
        .and_then(|_| fs::rename(&tmp, path))
        .map_err(|e| Error::Config(format!("cannot write output {}: {}", path.display(), e)))?;

    info!(
        "Wrote {} entries to {} ({} bytes)",
        data.entry_count(),
        path.display(),
        json.len()
    );
    Ok(())
}
