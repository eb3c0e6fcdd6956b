//! Page footers
//!
//! The bottom of a page carries some subset of: a decorative image, the page
//! number, an ornament glyph, a running chapter marker and the purchaser
//! watermark. Which subset appears varies across the book, so footers are
//! nested alternatives over the shapes that occur.

use crate::combinator::{alternative, image, matches, sequence, text, text_normalized, then, Parser};

/// Purchaser watermark, which carries an order number (`... #123456`)
pub fn watermark() -> Parser<String> {
    matches(r"#[0-9]+", "watermark")
}

/// Printed page number
pub fn page_number() -> Parser<String> {
    matches(r"^[0-9]+$", "page number")
}

/// Ornament glyph beside the page number
pub fn ornament() -> Parser<String> {
    text("W")
}

fn chapter_number() -> Parser<String> {
    matches(r"^[0-9]+$", "chapter number")
}

/// `CHAPTER` / `CAPÍTULO`
///
/// The running head is set in small caps, so the decoded case and accent
/// vary between printings.
pub fn chapter_word() -> Parser<String> {
    alternative([text_normalized("CAPÍTULO"), text_normalized("CHAPTER")])
}

/// Footer without a chapter marker
///
/// Shapes: `[image] page [W] watermark`, `[image] watermark`.
pub fn plain_footer() -> Parser<()> {
    alternative([
        sequence((image(), page_number(), ornament(), watermark())).ignore(),
        sequence((image(), page_number(), watermark())).ignore(),
        sequence((page_number(), ornament(), watermark())).ignore(),
        sequence((page_number(), watermark())).ignore(),
        sequence((image(), watermark())).ignore(),
        watermark().ignore(),
    ])
}

/// Footer with the running chapter head, `title` being the chapter name
pub fn chapter_footer(title: Parser<String>) -> Parser<()> {
    sequence((
        page_number(),
        ornament(),
        chapter_number(),
        chapter_number(),
        title,
        chapter_word(),
        chapter_word(),
        watermark(),
    ))
    .ignore()
}

/// Ornament plus chapter number and label, printed above a plain footer
fn chapter_marker() -> Parser<()> {
    sequence((ornament(), chapter_number(), chapter_word(), chapter_word())).ignore()
}

/// Any footer shape the equipment chapters use
pub fn footer_with_chapter(title: Parser<String>) -> Parser<()> {
    let chapter = chapter_footer(title);
    alternative([
        then(image(), chapter.clone()).ignore(),
        chapter,
        then(chapter_marker(), plain_footer()).ignore(),
        plain_footer(),
    ])
}
