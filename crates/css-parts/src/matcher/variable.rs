//! Variable matcher: `var(--name)` custom-property references.

use regex::Captures;

use super::MatchRecord;
use crate::part::Part;

/// [css-variables-1 § 3](https://www.w3.org/TR/css-variables-1/#using-variables)
///
/// A `var()` reference with an alphanumeric custom-property name and no
/// fallback argument.
pub(super) const PATTERN: &str = r"(?i)var\(--([a-z0-9]*)\)";

pub(super) fn handle(input: &str, caps: &Captures<'_>) -> Vec<MatchRecord> {
    let Some(whole) = caps.get(0) else {
        return Vec::new();
    };

    // Substituted text must be escaped when the reference sits inside a
    // quoted attribute value of an inlined SVG (`fill='var(--c)'`) or a
    // single-quoted string. Two heuristics: an `=` two bytes before the
    // match (the attribute's opening quote sits between), or a `'`
    // immediately after it.
    let bytes = input.as_bytes();
    let in_attribute = whole
        .start()
        .checked_sub(2)
        .is_some_and(|i| bytes.get(i) == Some(&b'='));
    let in_quotes = bytes.get(whole.end()) == Some(&b'\'');

    vec![MatchRecord {
        part: Part::Variable {
            name: caps[1].to_string(),
            encode: in_attribute || in_quotes,
        },
        offset: whole.start(),
        length: whole.len(),
    }]
}
