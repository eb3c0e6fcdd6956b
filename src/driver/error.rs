//! Driver errors
//!
//! These cover everything around a parse: looking pages up, loading their
//! tokens and persisting records. A page that parses to zero or several
//! results is not an error; it is reported through
//! [`PageReport`](super::PageReport).

use std::fmt;

/// Error raised by the page driver
#[derive(Debug, Clone, PartialEq)]
pub enum DriverError {
    /// The page has no entry in the page table
    UnknownPage {
        /// Requested page number
        page: u32,
    },

    /// The page source could not produce the page's tokens
    PageSource {
        /// Requested page number
        page: u32,
        /// Reason reported by the source
        message: String,
    },

    /// The page has more tokens than the configured limit
    PageTooLarge {
        /// Page number
        page: u32,
        /// Number of tokens on the page
        tokens: usize,
        /// Maximum allowed tokens
        max_tokens: usize,
    },

    /// A page table could not be read or is malformed
    InvalidPageTable {
        /// Reason why the table is invalid
        reason: String,
    },

    /// A record sink failed to persist a page
    Sink {
        /// Destination that could not be written
        path: String,
        /// Underlying error message
        message: String,
    },
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::UnknownPage { page } => {
                write!(f, "Page {} is not in the page table", page)
            }
            DriverError::PageSource { page, message } => {
                write!(f, "Could not load page {}: {}", page, message)
            }
            DriverError::PageTooLarge {
                page,
                tokens,
                max_tokens,
            } => {
                write!(
                    f,
                    "Page {} too large: {} tokens exceeds limit of {}",
                    page, tokens, max_tokens
                )
            }
            DriverError::InvalidPageTable { reason } => {
                write!(f, "Invalid page table: {}", reason)
            }
            DriverError::Sink { path, message } => {
                write!(f, "Could not write {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for DriverError {}
