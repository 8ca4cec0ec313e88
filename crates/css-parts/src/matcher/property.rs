//! Property matcher: custom-property declarations inside the `:root`
//! block.

use regex::Captures;

use super::MatchRecord;
use crate::part::Part;

/// [css-variables-1 § 2](https://www.w3.org/TR/css-variables-1/#defining-variables)
///
/// Greedy from the start of input through the first `{` after `:root`;
/// group 2 captures the block body up to the closing `}`. Only the first
/// `:root` block is recognized, and a literal `{` or `}` earlier in the
/// stylesheet corrupts the body extraction — a known limitation.
pub(super) const PATTERN: &str = r"(?i)([\s\S]*:root.*?\{)([^}]*)\}";

pub(super) fn handle(_input: &str, caps: &Captures<'_>) -> Vec<MatchRecord> {
    let Some(body) = caps.get(2) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    let mut acc = 0;
    let mut pairs = body.as_str().split(';').peekable();
    while let Some(pair) = pairs.next() {
        // A declaration needs text on both sides of the first colon;
        // anything else is skipped but still advances the accumulator.
        let Some((name, value)) = pair.split_once(':') else {
            acc += pair.len();
            continue;
        };
        if name.is_empty() || value.is_empty() {
            acc += pair.len();
            continue;
        }

        let name = name.trim();
        let name = name.strip_prefix("--").unwrap_or(name);
        // The span covers the declaration plus its trailing `;`, when one
        // follows (the last declaration in the block may omit it).
        let length = pair.len() + usize::from(pairs.peek().is_some());

        records.push(MatchRecord {
            part: Part::Property {
                name: name.to_string(),
                value: value.trim().to_string(),
            },
            offset: body.start() + acc,
            length,
        });

        acc += pair.len() + 1;
    }
    records
}
