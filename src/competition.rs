use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::fixtures::slug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Competition {
    #[serde(rename = "PL")]
    PremierLeague,
    #[serde(rename = "UCL")]
    ChampionsLeague,
    #[serde(rename = "FAC")]
    FaCup,
    #[serde(rename = "LC")]
    LeagueCup,
    #[serde(rename = "OTHER")]
    Other,
}

impl Competition {
    pub fn code(self) -> &'static str {
        match self {
            Competition::PremierLeague => "PL",
            Competition::ChampionsLeague => "UCL",
            Competition::FaCup => "FAC",
            Competition::LeagueCup => "LC",
            Competition::Other => "OTHER",
        }
    }
}

struct Keywords {
    competition: Competition,
    // Each phrase must appear as a run of whole words.
    phrases: &'static [&'static str],
}

// Checked top to bottom; the first hit wins.
const KEYWORDS: &[Keywords] = &[
    Keywords {
        competition: Competition::ChampionsLeague,
        phrases: &["champions league", "uefa champions", "ucl"],
    },
    Keywords {
        competition: Competition::FaCup,
        phrases: &["fa cup", "facup"],
    },
    Keywords {
        competition: Competition::LeagueCup,
        phrases: &["league cup", "carabao", "efl cup"],
    },
    Keywords {
        competition: Competition::PremierLeague,
        phrases: &["premier league", "epl", "pl"],
    },
];

/// Guess the competition from an event's title, description and location.
pub fn classify(summary: &str, description: &str, location: &str) -> Competition {
    let haystack = format!("{summary} {description} {location}").to_lowercase();
    let words = words(&haystack);

    KEYWORDS
        .iter()
        .find(|k| k.phrases.iter().any(|p| contains_phrase(&words, p)))
        .map(|k| k.competition)
        .unwrap_or(Competition::Other)
}

fn words(s: &str) -> Vec<&str> {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect()
}

fn contains_phrase(words: &[&str], phrase: &str) -> bool {
    let needle = self::words(phrase);
    if needle.is_empty() {
        return false;
    }
    words.windows(needle.len()).any(|w| w == needle.as_slice())
}

/// One forced classification. Without an opponent it applies to every
/// fixture on that date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub date: String,
    #[serde(default)]
    pub opponent: Option<String>,
    pub competition: Competition,
}

/// Manual corrections for fixtures the feed labels badly.
#[derive(Debug, Clone, Default)]
pub struct CompetitionOverrides {
    by_date_opponent: HashMap<(String, String), Competition>,
    by_date: HashMap<String, Competition>,
}

impl CompetitionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Corrections shipped with the binary.
    pub fn builtin() -> Self {
        let mut out = Self::new();
        out.insert_for_opponent("2026-03-21", "brighton", Competition::PremierLeague);
        out
    }

    /// Read a JSON array of [`OverrideEntry`].
    pub fn load_json(path: &Path) -> Result<Vec<OverrideEntry>> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read overrides {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("invalid overrides {}", path.display()))
    }

    pub fn extend(&mut self, entries: &[OverrideEntry]) {
        for entry in entries {
            match entry.opponent.as_deref().map(slug) {
                Some(opp) if !opp.is_empty() => {
                    self.insert_for_opponent(&entry.date, &opp, entry.competition)
                }
                _ => self.insert_for_date(&entry.date, entry.competition),
            }
        }
    }

    pub fn insert_for_opponent(&mut self, date: &str, opponent_slug: &str, comp: Competition) {
        self.by_date_opponent
            .insert((date.to_string(), opponent_slug.to_string()), comp);
    }

    pub fn insert_for_date(&mut self, date: &str, comp: Competition) {
        self.by_date.insert(date.to_string(), comp);
    }

    /// Exact `(date, opponent)` first, then date-only, then `classified`.
    pub fn resolve(&self, date: &str, opponent_slug: &str, classified: Competition) -> Competition {
        if let Some(comp) = self
            .by_date_opponent
            .get(&(date.to_string(), opponent_slug.to_string()))
        {
            return *comp;
        }
        if let Some(comp) = self.by_date.get(date) {
            return *comp;
        }
        classified
    }
}
