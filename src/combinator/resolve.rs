//! Outcome resolution at grammar boundaries
//!
//! A page grammar is accepted only when exactly one result spans the whole
//! page. Zero results is a rejection; more than one means the grammar is
//! under-constrained for that page, which is reported separately because it
//! calls for a grammar fix rather than an input fix.

use super::cursor::Cursor;
use super::outcome::{Outcome, Outcomes, ParseFailure};

/// Classification of a parser's outcomes over a full span
#[derive(Debug, Clone)]
pub enum Resolution<T> {
    /// Exactly one spanning result
    Accepted(T),
    /// No spanning result; every failure collected along the way
    Rejected {
        /// All failures produced by all branches
        failures: Vec<ParseFailure>,
    },
    /// More than one spanning result
    Ambiguous {
        /// Number of spanning results
        count: usize,
        /// All failures produced by all branches
        failures: Vec<ParseFailure>,
    },
}

impl<T> Resolution<T> {
    /// Whether the outcomes resolved to a single result
    pub fn is_accepted(&self) -> bool {
        matches!(self, Resolution::Accepted(_))
    }

    /// The accepted value, if any
    pub fn accepted(self) -> Option<T> {
        match self {
            Resolution::Accepted(value) => Some(value),
            _ => None,
        }
    }
}

/// Resolve outcomes whose results must consume the whole page
pub fn resolve<T>(outcomes: Outcomes<T>) -> Resolution<T> {
    resolve_where(outcomes, Cursor::at_end)
}

/// Resolve outcomes, counting only results whose remainder satisfies `spans`
///
/// Results that stop short are not counted either way: a grammar that
/// parsed half a page has not produced an interpretation of the page.
pub fn resolve_where<T>(outcomes: Outcomes<T>, spans: impl Fn(&Cursor) -> bool) -> Resolution<T> {
    let mut accepted = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Parsed { value, rest } if spans(&rest) => accepted.push(value),
            Outcome::Parsed { rest, .. } => failures.push(ParseFailure::at("end of page", &rest)),
            Outcome::Failed(failure) => failures.push(failure),
        }
    }

    match accepted.len() {
        0 => Resolution::Rejected { failures },
        1 => match accepted.pop() {
            Some(value) => Resolution::Accepted(value),
            None => Resolution::Rejected { failures },
        },
        count => Resolution::Ambiguous { count, failures },
    }
}
