//! Error types for the part tokenizer.

/// Errors surfaced by [`parse`](crate::parse).
///
/// Malformed CSS is never an error: regions no matcher recognizes stay
/// literal text, so tokenization always degrades to a best-effort segment
/// sequence. The only hard-failure class is a fault in the pattern engine
/// itself.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The pattern engine rejected one of the built-in matcher patterns.
    #[error("pattern engine fault: {0}")]
    EngineFault(#[from] regex::Error),
}
