//! Page tokens
//!
//! A page arrives from the tokenizer as a flat, ordered list of [`Token`]s:
//! text runs tagged with the font they were set in, and embedded images with
//! their placement. Tokens are read-only once produced.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Position of an embedded image on the page (PDF user-space units)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset from the left edge
    pub x: f32,
    /// Vertical offset from the bottom edge
    pub y: f32,
}

/// Decoded image payload
///
/// The pixel data sits behind an `Arc` so records that keep their artwork
/// (every equipment row and beast does) share it with the page tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Raw RGBA pixel data
    #[serde(skip)]
    pub data: Arc<[u8]>,
}

impl Image {
    /// Create an image from raw pixel data
    pub fn new(width: u32, height: u32, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            width,
            height,
            data: data.into(),
        }
    }

    /// A zero-sized placeholder, mostly useful in fixtures
    pub fn empty() -> Self {
        Self::new(0, 0, Vec::new())
    }
}

impl Default for Image {
    fn default() -> Self {
        Self::empty()
    }
}

/// A run of text set in a single font
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringToken {
    /// The text content
    pub text: String,
    /// Font name as reported by the page decoder (may carry a subset prefix)
    pub font: String,
}

/// An embedded image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageToken {
    /// The image payload
    pub image: Image,
    /// Where the image was placed
    pub position: Position,
}

/// Minimal lexical unit of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    /// Text run
    Text(StringToken),
    /// Embedded image
    Image(ImageToken),
}

impl Token {
    /// Build a text token
    pub fn text(text: impl Into<String>, font: impl Into<String>) -> Self {
        Token::Text(StringToken {
            text: text.into(),
            font: font.into(),
        })
    }

    /// Build an image token
    pub fn image(image: Image, position: Position) -> Self {
        Token::Image(ImageToken { image, position })
    }

    /// Text content, if this is a text token
    #[inline]
    pub fn as_text(&self) -> Option<&StringToken> {
        match self {
            Token::Text(t) => Some(t),
            Token::Image(_) => None,
        }
    }

    /// Image content, if this is an image token
    #[inline]
    pub fn as_image(&self) -> Option<&ImageToken> {
        match self {
            Token::Image(i) => Some(i),
            Token::Text(_) => None,
        }
    }
}

/// Renders the token the way diagnostics report it
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(t) => write!(f, "<Text str=\"{}\" font=\"{}\">", t.text, t.font),
            Token::Image(i) => write!(f, "<Image {}x{}>", i.image.width, i.image.height),
        }
    }
}
