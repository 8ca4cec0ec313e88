//! CSS part tokenizer for theme-aware stylesheet rewriting.
//!
//! Given a raw stylesheet string, [`parse`] produces an ordered sequence
//! of [`Segment`]s alternating literal substrings and typed [`Part`]s —
//! selector-list entries, `var(--name)` references, `:root`
//! custom-property declarations, and `url(...)` values — so a consumer
//! can rewrite individual constructs (theme variables, asset urls, scoped
//! selectors) and re-emit the stylesheet with [`to_css`], without a full
//! CSS grammar parser.
//!
//! # Scope
//!
//! This crate implements:
//! - **Matcher Registry** — an ordered, immutable table of four
//!   pattern/handler pairs, one per [`PartKind`], each scanning the whole
//!   input independently.
//! - **Match Collection & Assembly** — merging every match into one flat
//!   list, stable-sorting by offset, and slicing the input into
//!   alternating literal/part segments (empty literals pruned).
//! - **Serialization** — [`to_css`], a partial inverse reconstructing CSS
//!   text from a segment sequence, and `serde::Serialize` on the output
//!   types so a sequence embeds directly into a JSON module body.
//!
//! # Not Implemented / Known Limitations
//!
//! - No full CSS grammar: comments, nested at-rules, and strings
//!   containing unescaped braces confuse the patterns. Malformed CSS is
//!   never an error, though — unmatched regions stay literal text.
//! - Only the first `:root` block is recognized for custom-property
//!   declarations, and a literal `{` or `}` before it corrupts the block
//!   body extraction.
//! - Overlapping matches from different matchers resolve first-wins at
//!   assembly; the four patterns are mutually exclusive on well-formed
//!   input, so this only arises on out-of-scope inputs.

/// Error types for the part tokenizer.
pub mod error;
/// The ordered pattern/handler table recognizing each part kind.
pub(crate) mod matcher;
/// The parser entry points and segment assembler.
pub mod parse;
/// Part, kind, and segment types.
pub mod part;
/// Reconstruction of CSS text from a segment sequence.
pub mod serialize;

// Re-exports for convenience
pub use error::Error;
pub use parse::{ParseOptions, parse, parse_with};
pub use part::{Part, PartKind, Segment};
pub use serialize::to_css;
