use std::fs;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use lfc_fixtures::config::{Config, FeedSource};
use lfc_fixtures::documents_from_feed;
use lfc_fixtures::export::{log_season_counts, write_documents};
use lfc_fixtures::http_client::fetch_feed;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;
    let opts = config.feed_options()?;

    let raw = match &config.source {
        FeedSource::Url(url) => fetch_feed(url)?,
        FeedSource::File(path) => fs::read_to_string(path)
            .with_context(|| format!("read feed {}", path.display()))?,
    };

    let docs = documents_from_feed(&raw, &opts, Utc::now());
    log_season_counts(&docs);

    if config.dry_run {
        info!(seasons = docs.seasons.len(), "dry run, nothing written");
        return Ok(());
    }

    let written = write_documents(&docs, &config.output_dirs())?;
    info!(files = written.len(), "fixtures written");
    Ok(())
}
