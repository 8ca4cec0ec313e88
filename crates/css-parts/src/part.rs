//! Part types: the typed, position-free tokens extracted from CSS text.
//!
//! A [`Part`] is one recognized CSS construct; a [`Segment`] interleaves
//! parts with the literal text found between them. Concatenating the
//! literal segments with each part's matched span reconstructs the input.

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// The closed set of CSS constructs the tokenizer extracts.
///
/// Fixed at compile time; [`PartKind::ALL`] gives the canonical scan order
/// used by the matcher registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    /// One entry of a comma-separated selector list.
    Selector,
    /// A `var(--name)` custom-property reference.
    Variable,
    /// A custom-property declaration inside the `:root` block.
    Property,
    /// A `url(...)` value.
    Url,
}

impl PartKind {
    /// Every kind, in canonical scan order.
    pub const ALL: [Self; 4] = [Self::Selector, Self::Variable, Self::Property, Self::Url];
}

/// A typed, position-free token extracted from CSS text.
///
/// The payload shape depends on the kind: selectors and urls carry the
/// matched text, variables carry the custom-property name plus an escaping
/// flag, and properties carry a name/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Part {
    /// One entry of a comma-separated selector list.
    Selector {
        /// The selector text, whitespace-trimmed.
        value: String,
    },
    /// A `var(--name)` custom-property reference.
    ///
    /// [css-variables-1 § 3](https://www.w3.org/TR/css-variables-1/#using-variables)
    Variable {
        /// The custom-property name, without the `--` prefix.
        name: String,
        /// True when the reference sits inside a quoted XML/SVG attribute
        /// value or a single-quoted string, so a rewriter must escape the
        /// substituted text.
        encode: bool,
    },
    /// A `--name: value` declaration from the `:root` block.
    ///
    /// [css-variables-1 § 2](https://www.w3.org/TR/css-variables-1/#defining-variables)
    Property {
        /// The property name, without the `--` prefix.
        name: String,
        /// The declaration value, whitespace-trimmed.
        value: String,
    },
    /// A `url(...)` value.
    ///
    /// [css-values-4 § 8.5](https://www.w3.org/TR/css-values-4/#urls)
    Url {
        /// The raw URL text, without surrounding quotes.
        value: String,
    },
}

impl Part {
    /// The kind of this part.
    #[must_use]
    pub const fn kind(&self) -> PartKind {
        match self {
            Self::Selector { .. } => PartKind::Selector,
            Self::Variable { .. } => PartKind::Variable,
            Self::Property { .. } => PartKind::Property,
            Self::Url { .. } => PartKind::Url,
        }
    }
}

/// One element of the tokenizer output: literal CSS text or an extracted
/// part.
///
/// Serializes untagged, so a segment sequence becomes plain JSON strings
/// interleaved with part objects — the shape a downstream module loader
/// embeds directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Segment {
    /// A literal run of CSS text between extracted parts.
    Literal(String),
    /// An extracted part.
    Part(Part),
}

impl Segment {
    /// The literal text, if this segment is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(text.as_str()),
            Self::Part(_) => None,
        }
    }

    /// The part, if this segment is one.
    #[must_use]
    pub const fn as_part(&self) -> Option<&Part> {
        match self {
            Self::Part(part) => Some(part),
            Self::Literal(_) => None,
        }
    }
}
