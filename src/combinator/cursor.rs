//! Token stream cursor
//!
//! A [`Cursor`] is the shared token array plus an offset. Cloning one bumps a
//! reference count and copies the offset; the tokens themselves are never
//! copied or mutated, which is what keeps speculative branching cheap.

use super::token::Token;
use std::fmt;
use std::sync::Arc;

/// Immutable position in a page's token stream
#[derive(Clone)]
pub struct Cursor {
    tokens: Arc<[Token]>,
    offset: usize,
}

impl Cursor {
    /// Cursor at the start of a token list
    pub fn new(tokens: impl Into<Arc<[Token]>>) -> Self {
        Self {
            tokens: tokens.into(),
            offset: 0,
        }
    }

    /// Token under the cursor, or `None` at the end of the page
    #[inline]
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.offset)
    }

    /// Cursor one token further on
    ///
    /// At the end of the stream the offset stays put.
    #[inline]
    pub fn advance(&self) -> Cursor {
        Cursor {
            tokens: Arc::clone(&self.tokens),
            offset: (self.offset + 1).min(self.tokens.len()),
        }
    }

    /// Whether every token has been consumed
    #[inline]
    pub fn at_end(&self) -> bool {
        self.offset >= self.tokens.len()
    }

    /// Current offset
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of tokens on the page
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the page has no tokens at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Describe the token under the cursor for diagnostics
    pub fn describe(&self) -> String {
        match self.peek() {
            Some(token) => token.to_string(),
            None => "<end of page>".to_string(),
        }
    }

    /// Whether two cursors walk the same token array
    pub fn same_page(&self, other: &Cursor) -> bool {
        Arc::ptr_eq(&self.tokens, &other.tokens)
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset)
            .field("len", &self.tokens.len())
            .finish()
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        self.same_page(other) && self.offset == other.offset
    }
}
