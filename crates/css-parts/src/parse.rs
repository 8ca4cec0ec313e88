//! Parse CSS text into a segment sequence.
//!
//! Three stages: the matcher registry scans the input (each matcher
//! independently, over the whole string), the collected records are
//! stable-sorted by offset, and the assembler slices the original input
//! into alternating literal/part segments.

use std::sync::LazyLock;

use crate::error::Error;
use crate::matcher::{MatchRecord, MatcherRegistry};
use crate::part::{PartKind, Segment};

/// The standard matcher table, built once per process. The compile result
/// is cached so every caller sees the same table (or the same fault).
static REGISTRY: LazyLock<Result<MatcherRegistry, Error>> =
    LazyLock::new(MatcherRegistry::standard);

/// Options controlling which matchers run.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// The part kinds to extract. Matchers always run in canonical order
    /// ([`PartKind::ALL`]) regardless of the order given here; kinds not
    /// listed leave their constructs as literal text.
    pub kinds: Vec<PartKind>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            kinds: PartKind::ALL.to_vec(),
        }
    }
}

/// Tokenize CSS text into a segment sequence using every matcher.
///
/// Unmatched regions stay literal text, so malformed CSS degrades to a
/// best-effort sequence instead of failing. Input that matches nothing
/// comes back as a single literal holding the whole string — including
/// the empty string, which yields `[Literal("")]`.
///
/// # Errors
///
/// Returns [`Error::EngineFault`] if the pattern engine rejected one of
/// the built-in matcher patterns.
pub fn parse(css: &str) -> Result<Vec<Segment>, Error> {
    parse_with(css, &ParseOptions::default())
}

/// Tokenize CSS text, restricting which part kinds are extracted.
///
/// # Errors
///
/// Returns [`Error::EngineFault`] if the pattern engine rejected one of
/// the built-in matcher patterns.
pub fn parse_with(css: &str, options: &ParseOptions) -> Result<Vec<Segment>, Error> {
    let registry = REGISTRY.as_ref().map_err(Clone::clone)?;
    Ok(assemble(css, registry.collect(css, &options.kinds)))
}

/// Slice the original input into alternating literal/part segments.
fn assemble(input: &str, mut records: Vec<MatchRecord>) -> Vec<Segment> {
    if records.is_empty() {
        return vec![Segment::Literal(input.to_string())];
    }

    // Stable sort: matchers ran in canonical order, so records sharing an
    // offset keep that order.
    records.sort_by_key(|record| record.offset);

    let mut segments = Vec::with_capacity(records.len() * 2 + 1);
    let mut cursor = 0;
    for record in records {
        // First-wins overlap policy: a record whose span was already
        // consumed by an earlier record is dropped.
        if record.offset < cursor {
            continue;
        }
        segments.push(Segment::Literal(input[cursor..record.offset].to_string()));
        cursor = record.offset + record.length;
        segments.push(Segment::Part(record.part));
    }
    if cursor < input.len() {
        segments.push(Segment::Literal(input[cursor..].to_string()));
    }

    // The walk above pushes empty literals between back-to-back parts;
    // prune them so only parts and non-empty text remain.
    segments.retain(|segment| !matches!(segment, Segment::Literal(text) if text.is_empty()));
    segments
}
