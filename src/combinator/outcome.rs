//! Parse outcomes
//!
//! Every parser returns an ordered list of [`Outcome`]s. A failed branch is
//! an ordinary value, so sibling branches of an alternative carry on
//! regardless of what happened next door.

use super::cursor::Cursor;
use std::fmt;

/// A diagnostic produced by a parser that could not match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    /// Description of the expected construct
    pub message: String,
    /// Textual representation of the offending token
    pub found: String,
    /// Token offset where the failure occurred
    pub offset: usize,
}

impl ParseFailure {
    /// Failure at the token under `cursor`
    pub fn at(message: impl Into<String>, cursor: &Cursor) -> Self {
        Self {
            message: message.into(),
            found: cursor.describe(),
            offset: cursor.offset(),
        }
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} at token {}, found {}",
            self.message, self.offset, self.found
        )
    }
}

/// One candidate result of running a parser
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    /// The parser matched, producing `value` and leaving `rest` to read
    Parsed {
        /// Parsed value
        value: T,
        /// Remainder of the token stream
        rest: Cursor,
    },
    /// The parser did not match
    Failed(ParseFailure),
}

/// Ordered outcome collection returned by a parser
pub type Outcomes<T> = Vec<Outcome<T>>;

impl<T> Outcome<T> {
    /// Whether this is a successful parse
    #[inline]
    pub fn is_parsed(&self) -> bool {
        matches!(self, Outcome::Parsed { .. })
    }

    /// Whether this is a failure
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// Value and remainder of a successful parse
    pub fn parsed(&self) -> Option<(&T, &Cursor)> {
        match self {
            Outcome::Parsed { value, rest } => Some((value, rest)),
            Outcome::Failed(_) => None,
        }
    }

    /// Consume into value and remainder
    pub fn into_parsed(self) -> Option<(T, Cursor)> {
        match self {
            Outcome::Parsed { value, rest } => Some((value, rest)),
            Outcome::Failed(_) => None,
        }
    }

    /// The failure, if any
    pub fn failure(&self) -> Option<&ParseFailure> {
        match self {
            Outcome::Failed(f) => Some(f),
            Outcome::Parsed { .. } => None,
        }
    }
}

/// Whether any outcome is a successful parse
///
/// Lookahead only needs this; grammar boundaries go through
/// [`resolve`](super::resolve::resolve).
pub fn any_parsed<T>(outcomes: &[Outcome<T>]) -> bool {
    outcomes.iter().any(Outcome::is_parsed)
}

/// Failures at the furthest offset reached
///
/// The deepest failures are usually the most useful to show: they point at
/// the token where the best branch gave up.
pub fn deepest_failures(failures: &[ParseFailure]) -> Vec<&ParseFailure> {
    let Some(max) = failures.iter().map(|f| f.offset).max() else {
        return Vec::new();
    };
    failures.iter().filter(|f| f.offset == max).collect()
}

#[cfg(test)]
mod tests {
    use super::super::token::Token;
    use super::*;

    #[test]
    fn test_failure_reports_token() {
        let cursor = Cursor::new(vec![Token::text("HP", "Antonio-Bold")]);
        let failure = ParseFailure::at("MP", &cursor);
        assert_eq!(failure.found, "<Text str=\"HP\" font=\"Antonio-Bold\">");
        assert_eq!(failure.offset, 0);
        assert!(failure.to_string().starts_with("expected MP at token 0"));
    }

    #[test]
    fn test_deepest_failures() {
        let failures = vec![
            ParseFailure {
                message: "a".into(),
                found: "x".into(),
                offset: 1,
            },
            ParseFailure {
                message: "b".into(),
                found: "y".into(),
                offset: 4,
            },
            ParseFailure {
                message: "c".into(),
                found: "z".into(),
                offset: 4,
            },
        ];
        let deepest = deepest_failures(&failures);
        assert_eq!(deepest.len(), 2);
        assert!(deepest.iter().all(|f| f.offset == 4));
        assert!(deepest_failures(&[]).is_empty());
    }
}
