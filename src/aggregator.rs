use crate::filter::filter_recent;
use crate::parser::parse_entries;
use crate::registry::{AliasConfig, Registry, SourceSpec};
use crate::types::{FeedData, FeedEntry, FetchConfig, Group, Result, Source};
use crate::Fetcher;
use chrono::{DateTime, Utc};
use futures::future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{info, warn};

/// Pipeline orchestrator: expand, fetch, parse, filter, per source, and
/// assemble the results back into the registry's group tree.
///
/// This is the one place failure isolation happens: a fetch or parse error is
/// logged and becomes an empty entry list for that source, so every
/// configured source appears in the output and one broken feed can never
/// abort the run. The infallible return type of [`FeedAggregator::run`]
/// makes that a structural guarantee.
pub struct FeedAggregator {
    fetcher: Fetcher,
    alias: AliasConfig,
    max_entries_per_source: usize,
    max_concurrent_fetches: usize,
}

impl FeedAggregator {
    pub fn new(
        fetch_config: FetchConfig,
        alias: AliasConfig,
        max_entries_per_source: usize,
    ) -> Self {
        let max_concurrent_fetches = fetch_config.max_concurrent_fetches.max(1);
        Self {
            fetcher: Fetcher::new(fetch_config),
            alias,
            max_entries_per_source,
            max_concurrent_fetches,
        }
    }

    pub async fn run(&self, registry: &Registry, days_filter: u32) -> FeedData {
        let started = Utc::now();
        info!(
            "Aggregating {} sources in {} groups (window: {} days)",
            registry.source_count(),
            registry.groups.len(),
            days_filter
        );

        // Sources are independent; fetches run concurrently under a permit
        // cap. join_all keeps results in registry order, so each source
        // lands in its own slot.
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_fetches));

        let mut groups = Vec::with_capacity(registry.groups.len());
        for group_spec in &registry.groups {
            let jobs = group_spec.sources.iter().map(|spec| {
                let semaphore = semaphore.clone();
                async move {
                    let _permit = semaphore
                        .acquire()
                        .await
                        .expect("fetch semaphore closed");
                    self.process_source(spec, started, days_filter).await
                }
            });

            let sources = future::join_all(jobs).await;
            groups.push(Group {
                group_name: group_spec.group_name.clone(),
                sources,
            });
        }

        let data = FeedData {
            last_updated: started,
            days_filter,
            groups,
        };
        info!(
            "Aggregation finished: {} entries across {} sources",
            data.entry_count(),
            data.source_count()
        );
        data
    }

    async fn process_source(
        &self,
        spec: &SourceSpec,
        now: DateTime<Utc>,
        days_filter: u32,
    ) -> Source {
        let url = self.alias.expand(&spec.url);

        let entries = match self.fetch_and_parse(&spec.name, &url).await {
            Ok(entries) => {
                let total = entries.len();
                let mut kept = filter_recent(entries, now, days_filter);
                let within_window = kept.len();
                kept.truncate(self.max_entries_per_source);
                info!(
                    "Source \"{}\": {} entries, {} within window, keeping {}",
                    spec.name,
                    total,
                    within_window,
                    kept.len()
                );
                kept
            }
            Err(e) => {
                warn!("Skipping source \"{}\": {}", spec.name, e);
                Vec::new()
            }
        };

        Source {
            name: spec.name.clone(),
            url,
            entries,
        }
    }

    async fn fetch_and_parse(&self, name: &str, url: &str) -> Result<Vec<FeedEntry>> {
        let body = self.fetcher.fetch(name, url).await?;
        parse_entries(name, &body)
    }
}
