/// Start of an event as read from a compact `DTSTART` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kickoff {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub hh: String,
    pub mm: String,
    /// The token carried a trailing `Z` right after the seconds.
    pub utc: bool,
}

impl Kickoff {
    /// ISO instant built from the date and clock time.
    ///
    /// The `Z` suffix is always added, even for floating (non-UTC) tokens.
    pub fn datetime_utc(&self) -> String {
        format!("{}T{}:{}:00Z", self.date, self.hh, self.mm)
    }
}

/// Parse `YYYYMMDD[THHMMSS[Z]]`.
///
/// Only the leading part of the token is inspected: anything after the date
/// that is not `T` plus six digits leaves the time at midnight.
pub fn parse_dtstart(raw: &str) -> Option<Kickoff> {
    let raw = raw.trim();
    let date_part = digits_at(raw, 0, 8)?;
    let (year, rest) = date_part.split_at(4);
    let (month, day) = rest.split_at(2);
    let date = format!("{year}-{month}-{day}");

    let (hh, mm, utc) = match time_part(raw) {
        Some((hh, mm, utc)) => (hh.to_string(), mm.to_string(), utc),
        None => ("00".to_string(), "00".to_string(), false),
    };

    Some(Kickoff {
        time: format!("{hh}:{mm}"),
        date,
        hh,
        mm,
        utc,
    })
}

fn time_part(raw: &str) -> Option<(&str, &str, bool)> {
    if raw.as_bytes().get(8) != Some(&b'T') {
        return None;
    }
    let hms = digits_at(raw, 9, 6)?;
    let utc = raw.as_bytes().get(15) == Some(&b'Z');
    // Seconds are validated as digits but not kept.
    Some((&hms[0..2], &hms[2..4], utc))
}

fn digits_at(raw: &str, start: usize, len: usize) -> Option<&str> {
    let slice = raw.get(start..start + len)?;
    slice.bytes().all(|b| b.is_ascii_digit()).then_some(slice)
}
