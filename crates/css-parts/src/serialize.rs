//! Reconstruct CSS text from a segment sequence.

use crate::part::{Part, Segment};

/// Render a segment sequence back into CSS text.
///
/// Partial inverse of [`parse`](crate::parse): literals are emitted
/// verbatim; selector and url parts as their raw value; variable parts
/// re-wrapped as `var(--name)`; property parts as `--name: value;` (the
/// parsed span covers the declaration plus its trailing `;`, so the
/// serialized form includes one, though spacing inside the span is
/// normalized rather than preserved). A sequence that is a single literal
/// comes back unchanged.
#[must_use]
pub fn to_css(segments: &[Segment]) -> String {
    let mut css = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => css.push_str(text),
            Segment::Part(Part::Selector { value } | Part::Url { value }) => css.push_str(value),
            Segment::Part(Part::Variable { name, .. }) => {
                css.push_str("var(--");
                css.push_str(name);
                css.push(')');
            }
            Segment::Part(Part::Property { name, value }) => {
                css.push_str("--");
                css.push_str(name);
                css.push_str(": ");
                css.push_str(value);
                css.push(';');
            }
        }
    }
    css
}
