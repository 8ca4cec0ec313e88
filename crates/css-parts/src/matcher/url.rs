//! Url matcher: `url(...)` values, optionally quoted.

use regex::Captures;

use super::MatchRecord;
use crate::part::Part;

/// [css-values-4 § 8.5](https://www.w3.org/TR/css-values-4/#urls)
///
/// A `url()` token somewhere after a `:` on the same line. Group 2 is the
/// raw URL text; the optional quotes stay outside the capture.
pub(super) const PATTERN: &str = r#"(?i)(:.*?url.*?\(\s*(?:'|")?)(.+?)((?:'|"\s*)?\))"#;

pub(super) fn handle(_input: &str, caps: &Captures<'_>) -> Vec<MatchRecord> {
    let Some(url) = caps.get(2) else {
        return Vec::new();
    };

    // A url wrapping a variable reference belongs to the variable matcher;
    // reporting it here would shadow the inner reference.
    if url.as_str().contains("var(--") {
        return Vec::new();
    }

    vec![MatchRecord {
        part: Part::Url {
            value: url.as_str().to_string(),
        },
        offset: url.start(),
        length: url.len(),
    }]
}
