pub mod competition;
pub mod config;
pub mod export;
pub mod fixtures;
pub mod http_client;
pub mod ics;
pub mod kickoff;
pub mod season;
pub mod summary;

use chrono::{DateTime, Utc};

use crate::export::{Documents, build_documents, partition_by_season};
use crate::fixtures::{FeedOptions, parse_feed};

/// Whole pass from raw calendar text to the season files and index.
pub fn documents_from_feed(raw: &str, opts: &FeedOptions, generated_at: DateTime<Utc>) -> Documents {
    let fixtures = parse_feed(raw, opts);
    build_documents(partition_by_season(fixtures), generated_at)
}
