use crate::types::{Error, FeedEntry, Result};
use crate::utils::text;
use feed_rs::parser;
use tracing::debug;

/// Maximum description length after HTML cleanup.
const MAX_DESCRIPTION_LEN: usize = 300;

/// Converts raw RSS/Atom bytes into normalized entries, feed order preserved.
///
/// Normalization rules:
/// - a missing title becomes `"Untitled"`;
/// - an entry without any link is kept, with an empty link;
/// - the publish date falls back to the updated date, and an unparseable
///   date is simply absent;
/// - the description is the summary (or, failing that, the content body)
///   with HTML stripped and the result truncated.
pub fn parse_entries(source: &str, content: &[u8]) -> Result<Vec<FeedEntry>> {
    let feed = parser::parse(content).map_err(|e| Error::Parse {
        source: source.to_string(),
        reason: e.to_string(),
    })?;

    let entries: Vec<FeedEntry> = feed.entries.into_iter().map(normalize_entry).collect();

    debug!("Parsed {} entries for \"{}\"", entries.len(), source);
    Ok(entries)
}

fn normalize_entry(entry: feed_rs::model::Entry) -> FeedEntry {
    let title = entry
        .title
        .map(|t| t.content)
        .unwrap_or_else(|| "Untitled".to_string());

    let link = entry
        .links
        .first()
        .map(|l| l.href.clone())
        .unwrap_or_default();

    let pub_date = entry.published.or(entry.updated);

    let raw_description = entry
        .summary
        .map(|s| s.content)
        .or_else(|| entry.content.and_then(|c| c.body));

    let description = raw_description
        .map(|d| text::clean_html(&d, MAX_DESCRIPTION_LEN))
        .filter(|d| !d.is_empty());

    FeedEntry {
        title,
        link,
        pub_date,
        description,
    }
}
