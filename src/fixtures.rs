use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::competition::{Competition, CompetitionOverrides, classify};
use crate::ics::{field_value, split_events, unfold_lines};
use crate::kickoff::parse_dtstart;
use crate::season::Season;
use crate::summary::parse_teams_and_score;

pub const SOURCE_TAG: &str = "ics";
pub const DEFAULT_TEAM_MARKER: &str = "liverpool";
pub const UNKNOWN_OPPONENT: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Venue {
    #[serde(rename = "H")]
    Home,
    #[serde(rename = "A")]
    Away,
}

impl Venue {
    pub fn code(self) -> &'static str {
        match self {
            Venue::Home => "H",
            Venue::Away => "A",
        }
    }
}

/// One match of the tracked team, as published in the season files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fixture {
    pub source: &'static str,
    pub id: String,
    pub date: String,
    pub time: String,
    pub datetime_utc: String,
    pub competition: Competition,
    pub opponent: String,
    pub venue: Venue,
    pub location: String,
    #[serde(rename = "homeGoals")]
    pub home_goals: Option<u32>,
    #[serde(rename = "awayGoals")]
    pub away_goals: Option<u32>,
    #[serde(skip)]
    pub season: Season,
}

/// What to look for while turning calendar events into fixtures.
#[derive(Debug, Clone)]
pub struct FeedOptions {
    /// Lowercased substring identifying the tracked team in a title.
    pub team_marker: String,
    pub overrides: CompetitionOverrides,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            team_marker: DEFAULT_TEAM_MARKER.to_string(),
            overrides: CompetitionOverrides::builtin(),
        }
    }
}

impl FeedOptions {
    pub fn new(team_marker: &str, overrides: CompetitionOverrides) -> Self {
        Self {
            team_marker: team_marker.trim().to_lowercase(),
            overrides,
        }
    }

    fn is_tracked(&self, name: &str) -> bool {
        !self.team_marker.is_empty() && name.to_lowercase().contains(&self.team_marker)
    }
}

/// Normalise free text for ids and override lookups.
///
/// Lowercase, `&` spelled out, everything outside `[a-z0-9]` removed.
pub fn slug(s: &str) -> String {
    s.to_lowercase()
        .replace('&', "and")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn fixture_id(
    date: &str,
    competition: Competition,
    opponent: &str,
    venue: Venue,
    time: &str,
) -> String {
    format!(
        "{}-{}-{}-{}-{}",
        slug(date),
        slug(competition.code()),
        slug(opponent),
        venue.code().to_lowercase(),
        time.replace(':', "")
    )
}

fn opponent_or_unknown(name: &str) -> &str {
    let name = name.trim();
    if name.is_empty() { UNKNOWN_OPPONENT } else { name }
}

/// Build a fixture from one `VEVENT` block.
///
/// `None` for events without a usable start time and for events the tracked
/// team isn't part of.
pub fn build_fixture(block: &str, opts: &FeedOptions) -> Option<Fixture> {
    let dtstart = field_value(block, "DTSTART");
    if dtstart.is_empty() {
        debug!("skipping event without DTSTART");
        return None;
    }
    let Some(kickoff) = parse_dtstart(dtstart) else {
        debug!(dtstart, "skipping event with unparseable DTSTART");
        return None;
    };

    let summary = field_value(block, "SUMMARY");
    let description = field_value(block, "DESCRIPTION");
    let location = field_value(block, "LOCATION");

    let teams = parse_teams_and_score(summary);
    let (venue, opponent) = if opts.is_tracked(&teams.home) {
        (Venue::Home, teams.away.as_str())
    } else if opts.is_tracked(&teams.away) {
        (Venue::Away, teams.home.as_str())
    } else {
        debug!(summary, "skipping event without the tracked team");
        return None;
    };
    let opponent = opponent_or_unknown(opponent);

    if !kickoff.utc && dtstart.contains('T') {
        debug!(dtstart, "floating start time treated as UTC");
    }

    let classified = classify(summary, description, location);
    let competition = opts
        .overrides
        .resolve(&kickoff.date, &slug(opponent), classified);
    let season = Season::for_date(&kickoff.date)?;

    Some(Fixture {
        source: SOURCE_TAG,
        id: fixture_id(&kickoff.date, competition, opponent, venue, &kickoff.time),
        datetime_utc: kickoff.datetime_utc(),
        date: kickoff.date,
        time: kickoff.time,
        competition,
        opponent: opponent.to_string(),
        venue,
        location: location.to_string(),
        home_goals: teams.home_goals,
        away_goals: teams.away_goals,
        season,
    })
}

/// Keep the first fixture for every id, preserving order.
pub fn dedup_by_id(fixtures: Vec<Fixture>) -> Vec<Fixture> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(fixtures.len());
    for fixture in fixtures {
        if seen.insert(fixture.id.clone()) {
            out.push(fixture);
        } else {
            debug!(id = %fixture.id, "dropping duplicate fixture");
        }
    }
    out
}

/// Raw calendar text to deduplicated fixtures, in feed order.
pub fn parse_feed(raw: &str, opts: &FeedOptions) -> Vec<Fixture> {
    let unfolded = unfold_lines(raw);
    let blocks = split_events(&unfolded);
    let fixtures = blocks
        .iter()
        .filter_map(|block| build_fixture(block, opts))
        .collect::<Vec<_>>();
    debug!(
        events = blocks.len(),
        fixtures = fixtures.len(),
        "parsed calendar feed"
    );
    dedup_by_id(fixtures)
}
