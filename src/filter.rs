use crate::types::FeedEntry;
use chrono::{DateTime, Duration, Utc};

/// Keep entries whose publish date is on or after `now - days`. Undated
/// entries are always kept: recency cannot be verified, so the policy errs
/// toward inclusion. Pure and order-preserving.
pub fn filter_recent(entries: Vec<FeedEntry>, now: DateTime<Utc>, days: u32) -> Vec<FeedEntry> {
    let cutoff = now - Duration::days(i64::from(days));
    entries
        .into_iter()
        .filter(|entry| entry.pub_date.map_or(true, |date| date >= cutoff))
        .collect()
}
