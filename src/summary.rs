/// Participants (and final score, when present) read from an event title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleTeams {
    pub home: String,
    pub away: String,
    pub home_goals: Option<u32>,
    pub away_goals: Option<u32>,
}

type TitleMatcher = fn(&str) -> Option<TitleTeams>;

// Order matters: a title fitting both shapes is read as an unplayed fixture.
const MATCHERS: &[TitleMatcher] = &[match_versus, match_scoreline];

/// Parse `"Home v Away"` or `"Home 2-1 Away"`.
///
/// Unrecognised titles give empty participants, which callers treat as
/// "not a fixture".
pub fn parse_teams_and_score(summary: &str) -> TitleTeams {
    let s = summary.trim();
    MATCHERS
        .iter()
        .find_map(|matcher| matcher(s))
        .unwrap_or_default()
}

/// `<A> v <B>`, `<A> vs <B>`, `<A> v. <B>`, `<A> VS. <B>`.
fn match_versus(s: &str) -> Option<TitleTeams> {
    for (idx, ch) in s.char_indices() {
        if idx == 0 || !ch.is_whitespace() {
            continue;
        }
        let after_gap = s[idx..].trim_start();
        let Some(rest) = strip_versus(after_gap) else {
            continue;
        };
        let away = rest.trim();
        if away.is_empty() {
            continue;
        }
        return Some(TitleTeams {
            home: s[..idx].trim().to_string(),
            away: away.to_string(),
            home_goals: None,
            away_goals: None,
        });
    }
    None
}

/// Strip a `v[s][.]` separator plus the whitespace after it.
fn strip_versus(s: &str) -> Option<&str> {
    let rest = s.strip_prefix(['v', 'V'])?;
    let candidates = [
        rest.strip_prefix(['s', 'S'])
            .and_then(|r| r.strip_prefix('.')),
        rest.strip_prefix(['s', 'S']),
        rest.strip_prefix('.'),
        Some(rest),
    ];
    candidates
        .into_iter()
        .flatten()
        .find(|r| r.starts_with(char::is_whitespace))
}

/// `<A> <n> - <m> <B>` with a hyphen, en dash or em dash.
fn match_scoreline(s: &str) -> Option<TitleTeams> {
    for (idx, ch) in s.char_indices() {
        if idx == 0 || !ch.is_whitespace() {
            continue;
        }
        let after_gap = s[idx..].trim_start();
        let Some((home_goals, away_goals, rest)) = strip_score(after_gap) else {
            continue;
        };
        let away = rest.trim();
        if away.is_empty() {
            continue;
        }
        return Some(TitleTeams {
            home: s[..idx].trim().to_string(),
            away: away.to_string(),
            home_goals: Some(home_goals),
            away_goals: Some(away_goals),
        });
    }
    None
}

fn strip_score(s: &str) -> Option<(u32, u32, &str)> {
    let (home_goals, rest) = leading_number(s)?;
    let rest = rest.trim_start();
    let rest = rest.strip_prefix(['-', '–', '—'])?;
    let rest = rest.trim_start();
    let (away_goals, rest) = leading_number(rest)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some((home_goals, away_goals, rest))
}

fn leading_number(s: &str) -> Option<(u32, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    // Digits only, so a failed parse can only mean overflow.
    let n = s[..end].parse::<u32>().unwrap_or(u32::MAX);
    Some((n, &s[end..]))
}
