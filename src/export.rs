use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

use crate::fixtures::{Fixture, SOURCE_TAG};
use crate::season::{Season, SeasonWindow};

pub const FILE_PREFIX: &str = "lfc-fixtures";

#[derive(Debug, Clone)]
pub struct SeasonBucket {
    pub season: Season,
    pub fixtures: Vec<Fixture>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonDocument {
    #[serde(skip)]
    pub season: Season,
    pub generated_at: String,
    pub source: &'static str,
    pub season_id: String,
    pub season_label: String,
    pub season_window: SeasonWindow,
    pub count: usize,
    pub fixtures: Vec<Fixture>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub season_id: String,
    pub season_label: String,
    pub season_window: SeasonWindow,
    pub count: usize,
    pub file: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDocument {
    pub generated_at: String,
    pub source: &'static str,
    pub seasons: Vec<IndexEntry>,
}

#[derive(Debug, Clone)]
pub struct Documents {
    pub seasons: Vec<SeasonDocument>,
    pub index: IndexDocument,
}

pub fn season_file_name(season: Season) -> String {
    format!("{FILE_PREFIX}-{}.json", season.id())
}

pub fn index_file_name() -> String {
    format!("{FILE_PREFIX}-index.json")
}

/// Group fixtures by season, oldest season first, each sorted by kickoff.
pub fn partition_by_season(fixtures: Vec<Fixture>) -> Vec<SeasonBucket> {
    let mut by_season: BTreeMap<String, SeasonBucket> = BTreeMap::new();
    for fixture in fixtures {
        let season = fixture.season;
        by_season
            .entry(season.id())
            .or_insert_with(|| SeasonBucket {
                season,
                fixtures: Vec::new(),
            })
            .fixtures
            .push(fixture);
    }

    let mut out: Vec<SeasonBucket> = by_season.into_values().collect();
    for bucket in &mut out {
        // Zero-padded ISO pieces sort chronologically as plain strings.
        bucket
            .fixtures
            .sort_by(|a, b| (a.date.as_str(), a.time.as_str()).cmp(&(b.date.as_str(), b.time.as_str())));
    }
    out
}

pub fn build_documents(buckets: Vec<SeasonBucket>, generated_at: DateTime<Utc>) -> Documents {
    let stamp = generated_at.to_rfc3339_opts(SecondsFormat::Millis, true);

    let mut seasons = Vec::with_capacity(buckets.len());
    let mut entries = Vec::with_capacity(buckets.len());
    for bucket in buckets {
        let season = bucket.season;
        entries.push(IndexEntry {
            season_id: season.id(),
            season_label: season.label(),
            season_window: season.window(),
            count: bucket.fixtures.len(),
            file: season_file_name(season),
        });
        seasons.push(SeasonDocument {
            season,
            generated_at: stamp.clone(),
            source: SOURCE_TAG,
            season_id: season.id(),
            season_label: season.label(),
            season_window: season.window(),
            count: bucket.fixtures.len(),
            fixtures: bucket.fixtures,
        });
    }

    Documents {
        seasons,
        index: IndexDocument {
            generated_at: stamp,
            source: SOURCE_TAG,
            seasons: entries,
        },
    }
}

/// Write every season file and the index into each of `dirs`, in order.
///
/// Returns the paths written.
pub fn write_documents(docs: &Documents, dirs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for dir in dirs {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        for doc in &docs.seasons {
            let path = dir.join(season_file_name(doc.season));
            write_json(&path, doc)?;
            written.push(path);
        }
        let path = dir.join(index_file_name());
        write_json(&path, &docs.index)?;
        written.push(path);
    }
    Ok(written)
}

pub fn log_season_counts(docs: &Documents) {
    for doc in &docs.seasons {
        info!(
            season = %doc.season_id,
            fixtures = doc.count,
            "{} {} fixtures",
            doc.season_label,
            doc.count
        );
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("serialize {}", path.display()))?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("swap {}", path.display()))?;
    Ok(())
}
