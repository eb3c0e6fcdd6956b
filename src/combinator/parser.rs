//! Combinator core
//!
//! A [`Parser<T>`] is a shared function from a [`Cursor`] to an ordered list
//! of [`Outcome`]s. It may yield zero, one or many outcomes; callers decide
//! what to do with them at grammar boundaries (see [`resolve`]).
//!
//! # Example
//!
//! ```rust
//! use fabula_import::combinator::{alternative, sequence, success, text, Cursor, Token, Parser};
//!
//! let level: Parser<String> = alternative([text("Lv."), text("Nvl.")]);
//! let marker = sequence((level, success(7u32)));
//!
//! let page = Cursor::new(vec![Token::text("Nvl.", "Antonio-Bold")]);
//! let outcomes = marker.parse(&page);
//! assert_eq!(outcomes.len(), 2); // one match, one failure from the "Lv." branch
//! ```
//!
//! [`resolve`]: super::resolve::resolve

use super::cursor::Cursor;
use super::outcome::{any_parsed, Outcome, Outcomes, ParseFailure};
use std::sync::Arc;

type ParseFn<T> = dyn Fn(&Cursor) -> Outcomes<T> + Send + Sync;

/// A parser over a page's token stream
///
/// Cloning is cheap: the parse function is shared behind an `Arc`, so one
/// grammar can be built once and run by many workers.
pub struct Parser<T> {
    run: Arc<ParseFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T: 'static> Parser<T> {
    /// Wrap a parse function
    pub fn new(f: impl Fn(&Cursor) -> Outcomes<T> + Send + Sync + 'static) -> Self {
        Self { run: Arc::new(f) }
    }

    /// Run the parser at `cursor`
    #[inline]
    pub fn parse(&self, cursor: &Cursor) -> Outcomes<T> {
        (self.run)(cursor)
    }
}

// ============================================================================
// Fundamental Parsers
// ============================================================================

/// Always succeed with `value` without consuming anything
pub fn success<T: Clone + Send + Sync + 'static>(value: T) -> Parser<T> {
    Parser::new(move |cursor| {
        vec![Outcome::Parsed {
            value: value.clone(),
            rest: cursor.clone(),
        }]
    })
}

/// Always fail with `message`, reporting the current token
pub fn fail<T: 'static>(message: impl Into<String>) -> Parser<T> {
    let message = message.into();
    Parser::new(move |cursor| vec![Outcome::Failed(ParseFailure::at(message.clone(), cursor))])
}

// ============================================================================
// Mapping
// ============================================================================

/// Transform every successful value; failures pass through unchanged
pub fn map<A, B, F>(parser: Parser<A>, f: F) -> Parser<B>
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    Parser::new(move |cursor| {
        parser
            .parse(cursor)
            .into_iter()
            .map(|outcome| match outcome {
                Outcome::Parsed { value, rest } => Outcome::Parsed {
                    value: f(value),
                    rest,
                },
                Outcome::Failed(failure) => Outcome::Failed(failure),
            })
            .collect()
    })
}

/// Transform every successful value, failing where `f` returns `None`
///
/// This is how alias tables reject unrecognized tokens: the failure is
/// reported at the token the branch started on.
pub fn map_opt<A, B, F>(parser: Parser<A>, what: impl Into<String>, f: F) -> Parser<B>
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> Option<B> + Send + Sync + 'static,
{
    let what = what.into();
    Parser::new(move |cursor| {
        parser
            .parse(cursor)
            .into_iter()
            .map(|outcome| match outcome {
                Outcome::Parsed { value, rest } => match f(value) {
                    Some(value) => Outcome::Parsed { value, rest },
                    None => Outcome::Failed(ParseFailure::at(what.clone(), cursor)),
                },
                Outcome::Failed(failure) => Outcome::Failed(failure),
            })
            .collect()
    })
}

// ============================================================================
// Sequencing
// ============================================================================

/// Run `next` on every frontier branch, collecting failures as they happen
fn extend<Prev, T>(
    frontier: Vec<(Prev, Cursor)>,
    next: &Parser<T>,
    failures: &mut Vec<ParseFailure>,
) -> Vec<((Prev, T), Cursor)>
where
    Prev: Clone,
    T: 'static,
{
    let mut extended = Vec::new();
    for (prev, cursor) in frontier {
        for outcome in next.parse(&cursor) {
            match outcome {
                Outcome::Parsed { value, rest } => extended.push(((prev.clone(), value), rest)),
                Outcome::Failed(failure) => failures.push(failure),
            }
        }
    }
    extended
}

/// Assemble the outcome list of a sequence: complete branches first, then
/// every failure any step produced
fn finish<T>(parsed: impl IntoIterator<Item = (T, Cursor)>, failures: Vec<ParseFailure>) -> Outcomes<T> {
    parsed
        .into_iter()
        .map(|(value, rest)| Outcome::Parsed { value, rest })
        .chain(failures.into_iter().map(Outcome::Failed))
        .collect()
}

/// Run `first`, then `second` on every remainder `first` produced
pub fn then<A, B>(first: Parser<A>, second: Parser<B>) -> Parser<(A, B)>
where
    A: Clone + 'static,
    B: 'static,
{
    Parser::new(move |cursor| {
        let mut failures = Vec::new();
        let frontier = extend(vec![((), cursor.clone())], &first, &mut failures);
        let frontier = extend(frontier, &second, &mut failures);
        finish(
            frontier
                .into_iter()
                .map(|((((), a), b), rest)| ((a, b), rest)),
            failures,
        )
    })
}

/// Tuples of parsers that can run as a sequence
///
/// Implemented for tuples of 2 to 10 parsers; the output is the tuple of
/// their values. A branch failing at step *k* contributes its failure only.
pub trait Sequence {
    /// Tuple of the member parsers' values
    type Output;

    /// Build the sequence parser
    fn sequence(self) -> Parser<Self::Output>;
}

/// Left-nested tuple pattern matching the frontier built by [`extend`]
macro_rules! snoc_pattern {
    (@acc [$($acc:tt)*]) => { $($acc)* };
    (@acc [$($acc:tt)*] $head:ident $(, $tail:ident)*) => {
        snoc_pattern!(@acc [($($acc)*, $head)] $($tail),*)
    };
    ($($names:ident),+) => { snoc_pattern!(@acc [()] $($names),+) };
}

macro_rules! impl_sequence {
    ($($T:ident $parser:ident $value:ident),+) => {
        impl<$($T),+> Sequence for ($(Parser<$T>,)+)
        where
            $($T: Clone + Send + Sync + 'static),+
        {
            type Output = ($($T,)+);

            fn sequence(self) -> Parser<Self::Output> {
                let ($($parser,)+) = self;
                Parser::new(move |cursor| {
                    let mut failures = Vec::new();
                    let frontier = vec![((), cursor.clone())];
                    $(let frontier = extend(frontier, &$parser, &mut failures);)+
                    finish(
                        frontier
                            .into_iter()
                            .map(|(snoc_pattern!($($value),+), rest)| (($($value,)+), rest)),
                        failures,
                    )
                })
            }
        }
    };
}

impl_sequence!(A a va, B b vb);
impl_sequence!(A a va, B b vb, C c vc);
impl_sequence!(A a va, B b vb, C c vc, D d vd);
impl_sequence!(A a va, B b vb, C c vc, D d vd, E e ve);
impl_sequence!(A a va, B b vb, C c vc, D d vd, E e ve, F f vf);
impl_sequence!(A a va, B b vb, C c vc, D d vd, E e ve, F f vf, G g vg);
impl_sequence!(A a va, B b vb, C c vc, D d vd, E e ve, F f vf, G g vg, H h vh);
impl_sequence!(A a va, B b vb, C c vc, D d vd, E e ve, F f vf, G g vg, H h vh, I i vi);
impl_sequence!(A a va, B b vb, C c vc, D d vd, E e ve, F f vf, G g vg, H h vh, I i vi, J j vj);

/// Run a tuple of parsers in order
pub fn sequence<S: Sequence>(parsers: S) -> Parser<S::Output> {
    parsers.sequence()
}

/// Run `left` then `right`, keeping the left value
pub fn keep_left<A, B>(left: Parser<A>, right: Parser<B>) -> Parser<A>
where
    A: Clone + 'static,
    B: 'static,
{
    map(then(left, right), |(a, _)| a)
}

/// Run `left` then `right`, keeping the right value
pub fn keep_right<A, B>(left: Parser<A>, right: Parser<B>) -> Parser<B>
where
    A: Clone + 'static,
    B: 'static,
{
    map(then(left, right), |(_, b)| b)
}

// ============================================================================
// Alternatives
// ============================================================================

/// Run every parser at the same cursor and return the union of their outcomes
///
/// This is the only place ambiguity enters a grammar. Nothing is pruned
/// here: if two branches match, both results come back.
pub fn alternative<T: 'static>(parsers: impl IntoIterator<Item = Parser<T>>) -> Parser<T> {
    let parsers: Vec<Parser<T>> = parsers.into_iter().collect();
    Parser::new(move |cursor| parsers.iter().flat_map(|p| p.parse(cursor)).collect())
}

/// Either `parser` or nothing, as `alternative(parser, success(None))`
///
/// Both branches are kept; the one that does not fit is pruned by whatever
/// comes next in the sequence.
pub fn optional<T: Clone + Send + Sync + 'static>(parser: Parser<T>) -> Parser<Option<T>> {
    alternative([map(parser, Some), success(None)])
}

// ============================================================================
// Repetition
// ============================================================================

/// Leftmost-greedy repetition
///
/// Applies `parser` to the remainder of its previous first result until it
/// produces no result, and returns the maximal prefix (possibly empty) as a
/// single outcome. Failures from the attempt that stopped the repetition
/// follow it, so diagnostics can still see how far the input got.
pub fn many<T: Clone + 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    Parser::new(move |cursor| {
        let mut values = Vec::new();
        let mut current = cursor.clone();
        let failures = loop {
            let outcomes = parser.parse(&current);
            let mut failures = Vec::new();
            let mut next = None;
            for outcome in outcomes {
                match outcome {
                    Outcome::Parsed { value, rest } if next.is_none() => next = Some((value, rest)),
                    Outcome::Parsed { .. } => {}
                    Outcome::Failed(failure) => failures.push(failure),
                }
            }
            match next {
                Some((value, rest)) => {
                    let stalled = rest.offset() == current.offset();
                    values.push(value);
                    current = rest;
                    // a match that consumes nothing would repeat forever
                    if stalled {
                        break Vec::new();
                    }
                }
                None => break failures,
            }
        };
        finish(std::iter::once((values, current)), failures)
    })
}

/// Like [`many`], but at least one repetition is required
pub fn many1<T: Clone + 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    let repeated = many(parser);
    Parser::new(move |cursor| {
        let mut outcomes = repeated.parse(cursor);
        let empty = outcomes
            .iter()
            .any(|o| matches!(o, Outcome::Parsed { value, .. } if value.is_empty()));
        if empty {
            outcomes.retain(Outcome::is_failed);
            if outcomes.is_empty() {
                outcomes.push(Outcome::Failed(ParseFailure::at(
                    "at least one repetition",
                    cursor,
                )));
            }
        }
        outcomes
    })
}

// ============================================================================
// Lookahead
// ============================================================================

/// Succeed without consuming when `lookahead` matches here
pub fn peek<T: 'static>(lookahead: Parser<T>, what: impl Into<String>) -> Parser<()> {
    let what = what.into();
    Parser::new(move |cursor| {
        if any_parsed(&lookahead.parse(cursor)) {
            vec![Outcome::Parsed {
                value: (),
                rest: cursor.clone(),
            }]
        } else {
            vec![Outcome::Failed(ParseFailure::at(what.clone(), cursor))]
        }
    })
}

/// Run `section` only when `lookahead` matches at the cursor, else yield `absent`
///
/// Used for optional sections introduced by a keyword: the lookahead is a cheap
/// one-token check, and a section that is not there costs nothing.
pub fn when<P, T>(lookahead: Parser<P>, section: Parser<T>, absent: T) -> Parser<T>
where
    P: 'static,
    T: Clone + Send + Sync + 'static,
{
    Parser::new(move |cursor| {
        if any_parsed(&lookahead.parse(cursor)) {
            section.parse(cursor)
        } else {
            vec![Outcome::Parsed {
                value: absent.clone(),
                rest: cursor.clone(),
            }]
        }
    })
}

/// Scan forward to the first offset where `parser` matches, and run it there
///
/// Tokens before that offset are skipped. All outcomes at the matching
/// offset are returned, so an ambiguous match stays ambiguous.
pub fn skip_until<T: 'static>(parser: Parser<T>, what: impl Into<String>) -> Parser<T> {
    let what = what.into();
    Parser::new(move |cursor| {
        let mut at = cursor.clone();
        loop {
            let outcomes = parser.parse(&at);
            if any_parsed(&outcomes) {
                return outcomes;
            }
            if at.at_end() {
                return vec![Outcome::Failed(ParseFailure::at(what.clone(), cursor))];
            }
            at = at.advance();
        }
    })
}

// ============================================================================
// Extension methods
// ============================================================================

impl<T: Clone + Send + Sync + 'static> Parser<T> {
    /// `map(self, f)`
    pub fn map<B: 'static>(self, f: impl Fn(T) -> B + Send + Sync + 'static) -> Parser<B> {
        map(self, f)
    }

    /// `map_opt(self, what, f)`
    pub fn map_opt<B: 'static>(
        self,
        what: impl Into<String>,
        f: impl Fn(T) -> Option<B> + Send + Sync + 'static,
    ) -> Parser<B> {
        map_opt(self, what, f)
    }

    /// `then(self, other)`
    pub fn then<B: 'static>(self, other: Parser<B>) -> Parser<(T, B)> {
        then(self, other)
    }

    /// `keep_left(self, other)`: run both, keep this value
    pub fn skip<B: 'static>(self, other: Parser<B>) -> Parser<T> {
        keep_left(self, other)
    }

    /// `keep_right(self, other)`: run both, keep the other value
    pub fn with<B: 'static>(self, other: Parser<B>) -> Parser<B> {
        keep_right(self, other)
    }

    /// `alternative([self, other])`
    pub fn or(self, other: Parser<T>) -> Parser<T> {
        alternative([self, other])
    }

    /// Discard the value
    pub fn ignore(self) -> Parser<()> {
        map(self, |_| ())
    }

    /// `many(self)`
    pub fn many(self) -> Parser<Vec<T>> {
        many(self)
    }

    /// `many1(self)`
    pub fn many1(self) -> Parser<Vec<T>> {
        many1(self)
    }

    /// `optional(self)`
    pub fn optional(self) -> Parser<Option<T>> {
        optional(self)
    }
}
