use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use chrono::Utc;
use lfc_fixtures::documents_from_feed;
use lfc_fixtures::fixtures::{FeedOptions, parse_feed};

const OPPONENTS: &[&str] = &[
    "Arsenal",
    "Aston Villa",
    "Brighton & Hove Albion",
    "Chelsea",
    "Everton",
    "Manchester City",
    "Manchester United",
    "Newcastle United",
    "Real Madrid",
    "Tottenham Hotspur",
];

fn synthetic_feed(events: usize) -> String {
    let mut out = String::from("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n");
    for i in 0..events {
        let opponent = OPPONENTS[i % OPPONENTS.len()];
        let year = 2018 + (i / 60) as i32;
        let month = 1 + (i % 12);
        let day = 1 + (i % 28);
        let summary = if i % 3 == 0 {
            format!("{opponent} {}-{} Liverpool", i % 4, i % 3)
        } else {
            format!("Liverpool v {opponent}")
        };
        out.push_str(&format!(
            "BEGIN:VEVENT\r\nUID:bench-{i}\r\nDTSTART:{year}{month:02}{day:02}T{:02}0000Z\r\nSUMMARY:{summary}\r\nDESCRIPTION:Premier League matchday with a descriptio\r\n n that has been folded\r\nLOCATION:Anfield\r\nEND:VEVENT\r\n",
            12 + (i % 9)
        ));
    }
    out.push_str("END:VCALENDAR\r\n");
    out
}

fn bench_parse_feed(c: &mut Criterion) {
    let raw = synthetic_feed(2_000);
    let opts = FeedOptions::default();
    c.bench_function("parse_feed_2000_events", |b| {
        b.iter(|| {
            let fixtures = parse_feed(black_box(&raw), &opts);
            black_box(fixtures.len());
        })
    });
}

fn bench_documents(c: &mut Criterion) {
    let raw = synthetic_feed(2_000);
    let opts = FeedOptions::default();
    let now = Utc::now();
    c.bench_function("documents_from_feed_2000_events", |b| {
        b.iter(|| {
            let docs = documents_from_feed(black_box(&raw), &opts, now);
            black_box(docs.index.seasons.len());
        })
    });
}

criterion_group!(benches, bench_parse_feed, bench_documents);
criterion_main!(benches);
