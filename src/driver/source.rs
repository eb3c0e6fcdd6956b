//! Page sources
//!
//! A page source hands out token arrays for PDF pages. Decoding a page may
//! pin resources (rendered images, font data) that must be given back once
//! the page is done with. That obligation travels with the tokens as a
//! [`PageLease`], which releases exactly once when dropped.

use super::error::DriverError;
use crate::combinator::Token;
use std::fmt;

type ReleaseFn = Box<dyn FnOnce() + Send + Sync>;

/// Release obligation for a loaded page
///
/// Dropping the lease runs its release action. Nothing can run it twice.
pub struct PageLease {
    page: u32,
    release: Option<ReleaseFn>,
}

impl PageLease {
    /// Lease that runs `release` when dropped
    pub fn new(page: u32, release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            page,
            release: Some(Box::new(release)),
        }
    }

    /// Lease with nothing to release
    pub fn unheld(page: u32) -> Self {
        Self {
            page,
            release: None,
        }
    }

    /// Page the lease belongs to
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Release now instead of at drop
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for PageLease {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            log_debug!("releasing page {}", self.page);
            release();
        }
    }
}

impl fmt::Debug for PageLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageLease")
            .field("page", &self.page)
            .field("held", &self.release.is_some())
            .finish()
    }
}

/// Tokens of one page with their lease
#[derive(Debug)]
pub struct LoadedPage {
    /// Page tokens in reading order
    pub tokens: Vec<Token>,
    /// Release obligation
    pub lease: PageLease,
}

/// Supplier of page tokens
pub trait PageSource {
    /// Load the tokens of `page`
    fn load(&self, page: u32) -> Result<LoadedPage, DriverError>;
}

/// Pages kept in memory, for fixtures and pre-tokenized books
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pages: std::collections::BTreeMap<u32, Vec<Token>>,
}

impl MemorySource {
    /// Empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page
    pub fn with_page(mut self, page: u32, tokens: Vec<Token>) -> Self {
        self.pages.insert(page, tokens);
        self
    }
}

impl PageSource for MemorySource {
    fn load(&self, page: u32) -> Result<LoadedPage, DriverError> {
        let tokens = self.pages.get(&page).cloned().ok_or_else(|| DriverError::PageSource {
            page,
            message: "page not loaded".to_string(),
        })?;
        Ok(LoadedPage {
            tokens,
            lease: PageLease::unheld(page),
        })
    }
}
