//! Minimal iCalendar handling: unfolding, VEVENT splitting and field lookup.
//!
//! This is deliberately not a full RFC 5545 parser. It only understands the
//! handful of shapes the fixtures feed actually uses.

pub const EVENT_BEGIN: &str = "BEGIN:VEVENT";

/// Undo RFC 5545 line folding.
///
/// A line break (`\n` or `\r\n`) immediately followed by a single space or tab
/// is dropped together with that continuation character.
pub fn unfold_lines(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len());
    let mut start = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        let fold_len = match bytes[i] {
            b'\r' if bytes.get(i + 1) == Some(&b'\n') && is_fold_char(bytes.get(i + 2)) => 3,
            b'\n' if is_fold_char(bytes.get(i + 1)) => 2,
            _ => 0,
        };
        if fold_len == 0 {
            i += 1;
            continue;
        }
        // Only ASCII bytes are skipped, so both ends stay on char boundaries.
        out.push_str(&raw[start..i]);
        i += fold_len;
        start = i;
    }
    out.push_str(&raw[start..]);
    out
}

fn is_fold_char(b: Option<&u8>) -> bool {
    matches!(b, Some(b' ') | Some(b'\t'))
}

/// Split unfolded calendar text into one block per event.
///
/// Everything before the first `BEGIN:VEVENT` is discarded and the marker is
/// put back at the start of every block.
pub fn split_events(unfolded: &str) -> Vec<String> {
    unfolded
        .split(EVENT_BEGIN)
        .skip(1)
        .map(|rest| format!("{EVENT_BEGIN}{rest}"))
        .collect()
}

/// Value of the first `KEY[;params]:VALUE` line in `block`, trimmed.
///
/// The key is case-sensitive. Returns an empty string when the key is absent.
pub fn field_value<'a>(block: &'a str, key: &str) -> &'a str {
    if key.is_empty() {
        return "";
    }
    for line in block.lines() {
        let Some(rest) = line.strip_prefix(key) else {
            continue;
        };
        let value = if let Some(v) = rest.strip_prefix(':') {
            v
        } else if let Some(params) = rest.strip_prefix(';') {
            // Parameters run up to the first colon on the line.
            match params.split_once(':') {
                Some((_, v)) => v,
                None => continue,
            }
        } else {
            continue;
        };
        return value.trim();
    }
    ""
}
