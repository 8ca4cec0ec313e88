//! The matcher registry: an ordered, immutable table of pattern/handler
//! pairs, each responsible for recognizing one [`PartKind`].
//!
//! Every matcher re-scans the *entire original input* to exhaustion,
//! independently of the others; the registry merges the resulting records
//! into one flat list for the assembler. The four patterns are mutually
//! exclusive on well-formed input, so no overlap resolution happens here
//! (the assembler drops later records whose span was already consumed).

use regex::{Captures, Regex};

use crate::error::Error;
use crate::part::{Part, PartKind};

mod property;
mod selector;
mod url;
mod variable;

/// A candidate part with its byte coordinates in the original input.
///
/// Records are transient: the assembler consumes the coordinates and only
/// the [`Part`] survives into the output sequence.
#[derive(Debug, Clone)]
pub(crate) struct MatchRecord {
    /// The extracted part.
    pub(crate) part: Part,
    /// Byte offset of the matched span in the original input.
    pub(crate) offset: usize,
    /// Byte length of the matched span.
    pub(crate) length: usize,
}

/// A handler turns one pattern match into zero or more records.
///
/// Handlers are pure functions of the input and the captures; they never
/// see or mutate state outside their return value.
type Handler = fn(&str, &Captures<'_>) -> Vec<MatchRecord>;

/// One pattern/handler pair responsible for a single [`PartKind`].
struct Matcher {
    kind: PartKind,
    pattern: Regex,
    handler: Handler,
}

impl Matcher {
    fn new(kind: PartKind, pattern: &str, handler: Handler) -> Result<Self, Error> {
        Ok(Self {
            kind,
            pattern: Regex::new(pattern)?,
            handler,
        })
    }
}

/// The ordered matcher table. Built once per process and immutable after,
/// so concurrent callers share it without locking.
pub(crate) struct MatcherRegistry {
    matchers: Vec<Matcher>,
}

impl MatcherRegistry {
    /// Build the standard four-matcher table in canonical scan order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EngineFault`] if the pattern engine rejects one of
    /// the built-in patterns.
    pub(crate) fn standard() -> Result<Self, Error> {
        Ok(Self {
            matchers: vec![
                Matcher::new(PartKind::Selector, selector::PATTERN, selector::handle)?,
                Matcher::new(PartKind::Variable, variable::PATTERN, variable::handle)?,
                Matcher::new(PartKind::Property, property::PATTERN, property::handle)?,
                Matcher::new(PartKind::Url, url::PATTERN, url::handle)?,
            ],
        })
    }

    /// Run every enabled matcher over the whole input and merge the
    /// records.
    ///
    /// Matchers always run in canonical order no matter how the caller
    /// orders `enabled`, so records at the same offset tie-break the same
    /// way before the assembler's stable sort.
    pub(crate) fn collect(&self, input: &str, enabled: &[PartKind]) -> Vec<MatchRecord> {
        let mut records = Vec::new();
        for matcher in &self.matchers {
            if !enabled.contains(&matcher.kind) {
                continue;
            }
            for caps in matcher.pattern.captures_iter(input) {
                records.extend((matcher.handler)(input, &caps));
            }
        }
        records
    }
}
