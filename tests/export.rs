use std::fs;
use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use serde_json::Value;

use lfc_fixtures::documents_from_feed;
use lfc_fixtures::export::{index_file_name, partition_by_season, write_documents};
use lfc_fixtures::fixtures::{FeedOptions, parse_feed};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lfc_fixtures_{}_{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn seasons_are_ordered_and_sorted_by_kickoff() {
    let raw = read_fixture("liverpool.ics");
    let buckets = partition_by_season(parse_feed(&raw, &FeedOptions::default()));

    let ids: Vec<String> = buckets.iter().map(|b| b.season.id()).collect();
    assert_eq!(ids, vec!["2024-25", "2025-26"]);

    let dates: Vec<&str> = buckets[1].fixtures.iter().map(|f| f.date.as_str()).collect();
    assert_eq!(dates, vec!["2025-11-04", "2026-01-31", "2026-03-15", "2026-03-21"]);
}

#[test]
fn same_day_fixtures_sort_by_time() {
    let raw = "BEGIN:VEVENT\nDTSTART:20250810T173000Z\nSUMMARY:Liverpool v Chelsea\nEND:VEVENT\n\
               BEGIN:VEVENT\nDTSTART:20250810T120000Z\nSUMMARY:Liverpool v Arsenal\nEND:VEVENT\n";
    let buckets = partition_by_season(parse_feed(raw, &FeedOptions::default()));
    assert_eq!(buckets.len(), 1);
    let opponents: Vec<&str> = buckets[0].fixtures.iter().map(|f| f.opponent.as_str()).collect();
    assert_eq!(opponents, vec!["Arsenal", "Chelsea"]);
}

#[test]
fn documents_carry_season_metadata() {
    let raw = read_fixture("liverpool.ics");
    let generated_at = Utc.with_ymd_and_hms(2026, 2, 1, 9, 30, 0).unwrap();
    let docs = documents_from_feed(&raw, &FeedOptions::default(), generated_at);

    assert_eq!(docs.seasons.len(), 2);
    assert_eq!(docs.index.seasons.len(), 2);

    let json = serde_json::to_value(&docs.seasons[1]).expect("season json");
    assert_eq!(json["generatedAt"], "2026-02-01T09:30:00.000Z");
    assert_eq!(json["source"], "ics");
    assert_eq!(json["seasonId"], "2025-26");
    assert_eq!(json["seasonLabel"], "25/26");
    assert_eq!(json["seasonWindow"]["from"], "2025-08-01");
    assert_eq!(json["seasonWindow"]["to"], "2026-07-31");
    assert_eq!(json["count"], 4);

    let first = &json["fixtures"][0];
    assert_eq!(first["opponent"], "Real Madrid");
    assert_eq!(first["competition"], "UCL");
    assert_eq!(first["venue"], "H");
    assert_eq!(first["datetime_utc"], "2025-11-04T20:00:00Z");
    assert_eq!(first["homeGoals"], Value::Null);
    assert!(first.get("season").is_none());

    let result = &json["fixtures"][2];
    assert_eq!(result["venue"], "A");
    assert_eq!(result["homeGoals"], 2);
    assert_eq!(result["awayGoals"], 0);

    let index = serde_json::to_value(&docs.index).expect("index json");
    assert_eq!(index["seasons"][0]["seasonId"], "2024-25");
    assert_eq!(index["seasons"][0]["count"], 1);
    assert_eq!(index["seasons"][1]["file"], "lfc-fixtures-2025-26.json");
}

#[test]
fn writes_mirrored_outputs() {
    let raw = read_fixture("liverpool.ics");
    let docs = documents_from_feed(&raw, &FeedOptions::default(), Utc::now());

    let root = scratch_dir("mirror");
    let dirs = vec![root.join("data"), root.join("public").join("data")];
    let written = write_documents(&docs, &dirs).expect("write documents");
    assert_eq!(written.len(), 6);

    let season_files: Vec<String> = written[..2]
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
        .collect();
    let index_files: Vec<String> = docs.index.seasons.iter().map(|e| e.file.clone()).collect();
    assert_eq!(season_files, index_files);

    for dir in &dirs {
        let raw_index = fs::read_to_string(dir.join(index_file_name())).expect("index written");
        let index: Value = serde_json::from_str(&raw_index).expect("index json");
        for entry in index["seasons"].as_array().expect("seasons array") {
            let file = entry["file"].as_str().expect("file name");
            let raw_season = fs::read_to_string(dir.join(file)).expect("season written");
            let season: Value = serde_json::from_str(&raw_season).expect("season json");
            assert_eq!(season["seasonId"], entry["seasonId"]);
            assert_eq!(season["count"], entry["count"]);
        }
        assert!(!dir.join("lfc-fixtures-index.json.tmp").exists());
    }

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn empty_feed_still_writes_an_index() {
    let docs = documents_from_feed("", &FeedOptions::default(), Utc::now());
    assert!(docs.seasons.is_empty());

    let root = scratch_dir("empty");
    let written = write_documents(&docs, &[root.clone()]).expect("write documents");
    assert_eq!(written, vec![root.join("lfc-fixtures-index.json")]);

    let _ = fs::remove_dir_all(&root);
}
