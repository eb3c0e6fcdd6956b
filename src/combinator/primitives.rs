//! Primitive token parsers
//!
//! Each primitive looks at exactly one token and either consumes it or
//! fails. Everything else is built from these with the combinators in
//! [`parser`](super::parser).

use super::cursor::Cursor;
use super::outcome::{Outcome, Outcomes, ParseFailure};
use super::parser::Parser;
use super::regex_cache;
use super::token::{Image, StringToken, Token};
use crate::text::normalize_text;
use regex::Regex;

/// Consume one token when `accept` maps it to a value
fn one_token<T: 'static>(
    what: impl Into<String>,
    accept: impl Fn(&Token) -> Option<T> + Send + Sync + 'static,
) -> Parser<T> {
    let what = what.into();
    Parser::new(move |cursor: &Cursor| -> Outcomes<T> {
        match cursor.peek().and_then(&accept) {
            Some(value) => vec![Outcome::Parsed {
                value,
                rest: cursor.advance(),
            }],
            None => vec![Outcome::Failed(ParseFailure::at(what.clone(), cursor))],
        }
    })
}

/// Consume one text token when `accept` maps it to a value
pub fn text_token<T: 'static>(
    what: impl Into<String>,
    accept: impl Fn(&StringToken) -> Option<T> + Send + Sync + 'static,
) -> Parser<T> {
    one_token(what, move |token| token.as_text().and_then(&accept))
}

fn font_matches(fonts: &[Regex], font: &str) -> bool {
    fonts.iter().any(|r| r.is_match(font))
}

/// Any text token, yielding its text
pub fn string() -> Parser<String> {
    text_token("text", |t| Some(t.text.clone()))
}

/// A text token whose text is exactly `literal`
pub fn text(literal: &str) -> Parser<String> {
    let literal = literal.to_string();
    text_token(format!("\"{}\"", literal), move |t| {
        (t.text == literal).then(|| t.text.clone())
    })
}

/// A text token equal to `literal` after case folding and accent stripping
pub fn text_normalized(literal: &str) -> Parser<String> {
    let wanted = normalize_text(literal);
    text_token(format!("\"{}\"", literal), move |t| {
        (normalize_text(&t.text) == wanted).then(|| t.text.clone())
    })
}

/// A text token matching `pattern`, yielding the matched text
///
/// An invalid pattern produces a parser that always fails.
pub fn matches(pattern: &str, what: &str) -> Parser<String> {
    match regex_cache::get_or_compile(pattern) {
        Some(regex) => text_token(what, move |t| regex.is_match(&t.text).then(|| t.text.clone())),
        None => super::parser::fail(format!("{} (invalid pattern {})", what, pattern)),
    }
}

/// Any image token, yielding its payload
pub fn image() -> Parser<Image> {
    one_token("image", |token| token.as_image().map(|i| i.image.clone()))
}

/// A text token set in one of `fonts` (regex patterns), yielding its text
pub fn string_with_font(fonts: &[&str]) -> Parser<String> {
    let compiled = regex_cache::compile_all(fonts);
    text_token(format!("text in {}", fonts.join(" | ")), move |t| {
        font_matches(&compiled, &t.font).then(|| t.text.clone())
    })
}

/// A text token set in none of `fonts`, yielding its text
pub fn string_without_font(fonts: &[&str]) -> Parser<String> {
    let compiled = regex_cache::compile_all(fonts);
    text_token(format!("text not in {}", fonts.join(" | ")), move |t| {
        (!font_matches(&compiled, &t.font)).then(|| t.text.clone())
    })
}

/// The text `literal` set in one of `fonts`
///
/// Icon fonts reuse ordinary letters for glyphs, so an icon is identified by
/// the pair of character and font.
pub fn text_with_font(literal: &str, fonts: &[&str]) -> Parser<String> {
    let literal = literal.to_string();
    let compiled = regex_cache::compile_all(fonts);
    text_token(
        format!("\"{}\" in {}", literal, fonts.join(" | ")),
        move |t| (t.text == literal && font_matches(&compiled, &t.font)).then(|| t.text.clone()),
    )
}

/// Succeed only at the end of the page
pub fn end() -> Parser<()> {
    Parser::new(|cursor| {
        if cursor.at_end() {
            vec![Outcome::Parsed {
                value: (),
                rest: cursor.clone(),
            }]
        } else {
            vec![Outcome::Failed(ParseFailure::at("end of page", cursor))]
        }
    })
}
