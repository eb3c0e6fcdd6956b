//! Backtracking parser combinators over page token streams
//!
//! # Module Organization
//!
//! ## Input
//! - [`token`] - Text and image tokens produced by the page tokenizer
//! - [`cursor`] - Cheap-to-clone position in a token array
//!
//! ## Parsing
//! - [`parser`] - The [`Parser`] type and its combinators
//! - [`primitives`] - Single-token parsers (text, regex, font, image, end)
//! - [`outcome`] - Parsed / failed outcomes
//!
//! ## Boundaries
//! - [`resolve`] - Exactly-one acceptance at grammar boundaries
//!
//! ## Caching
//! - [`regex_cache`] - Compiled pattern cache

// ============================================================================
// Module Declarations
// ============================================================================

pub mod cursor;
pub mod outcome;
pub mod parser;
pub mod primitives;
pub mod regex_cache;
pub mod resolve;
pub mod token;

// ============================================================================
// Core Types
// ============================================================================

pub use cursor::Cursor;
pub use outcome::{any_parsed, deepest_failures, Outcome, Outcomes, ParseFailure};
pub use token::{Image, ImageToken, Position, StringToken, Token};

// ============================================================================
// Combinators
// ============================================================================

pub use parser::{
    alternative, fail, keep_left, keep_right, many, many1, map, map_opt, optional, peek, sequence,
    skip_until, success, then, when, Parser, Sequence,
};

pub use primitives::{
    end, image, matches, string, string_with_font, string_without_font, text, text_normalized,
    text_token, text_with_font,
};

// ============================================================================
// Resolution
// ============================================================================

pub use resolve::{resolve, resolve_where, Resolution};
