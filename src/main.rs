use clap::Parser;
use newsstand::{output, recommendations, AppConfig, FeedAggregator, Registry};
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "newsstand",
    version,
    about = "Fetch configured RSS/Atom feeds into a grouped static JSON snapshot"
)]
struct Cli {
    /// Recency window in days; entries older than this are dropped
    days: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    let days_filter = cli.days.unwrap_or(config.default_days_filter);

    let registry = Registry::load(&config.registry_path)?;

    let aggregator = FeedAggregator::new(
        config.fetch.clone(),
        config.alias.clone(),
        config.max_entries_per_source,
    );
    let data = aggregator.run(&registry, days_filter).await;

    output::write_feed_data(&config.output_path, &data)?;

    // The recommendations file is hand-edited and merged at render time; the
    // run only validates it, and a broken file never fails a snapshot that
    // was already written.
    match recommendations::load(&config.recommendations_path) {
        Ok(recs) => {
            if !recs.recommendations.is_empty() {
                info!(
                    "Recommendations file has {} categories",
                    recs.recommendations.len()
                );
            }
        }
        Err(e) => warn!("{}", e),
    }

    info!("Done");
    Ok(())
}
