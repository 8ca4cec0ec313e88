//! Selector matcher: comma-separated selector lists before an opening
//! brace.

use regex::Captures;

use super::MatchRecord;
use crate::part::Part;

/// A selector list is a run of selector characters ending at `{`, preceded
/// by start of input, a newline, or a closing brace (each with optional
/// whitespace). Group 1 is the leader, group 2 the selector list.
pub(super) const PATTERN: &str =
    r#"(?i)(^\s*?|\n\s*?|\}\s*)([a-z0-9 =_,+^*$"'> \t\r\n\[\]():\-.#]+)\{"#;

/// Selector-position keywords that are grammar, not elements: the `:root`
/// pseudo-class (owned by the property matcher) and `@keyframes` stops.
/// They produce no part but still advance the offset accumulator, so their
/// source text stays literal.
const SKIPPED: [&str; 3] = [":root", "from", "to"];

pub(super) fn handle(_input: &str, caps: &Captures<'_>) -> Vec<MatchRecord> {
    let Some(list) = caps.get(2) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    let mut acc = 0;
    for entry in list.as_str().split(',') {
        let trimmed = entry.trim();
        if !SKIPPED.contains(&trimmed) {
            // The span covers the trimmed entry only; surrounding
            // whitespace stays in the neighboring literals.
            let leading = entry.len() - entry.trim_start().len();
            records.push(MatchRecord {
                part: Part::Selector {
                    value: trimmed.to_string(),
                },
                offset: list.start() + acc + leading,
                length: trimmed.len(),
            });
        }
        // Entry plus the comma that delimited it.
        acc += entry.len() + 1;
    }
    records
}
