//! Driver configuration

use crate::model::CategoryFallback;

/// Default provenance prefix, the core rulebook's source code
pub const DEFAULT_SOURCE_PREFIX: &str = "FUCR";

/// Default difference between PDF page numbers and printed page numbers
pub const DEFAULT_PAGE_OFFSET: u32 = 2;

/// Default token limit per page
pub const DEFAULT_MAX_PAGE_TOKENS: usize = 100_000;

/// Configuration options for the page driver
///
/// # Example
///
/// ```rust
/// use fabula_import::driver::DriverConfig;
/// use fabula_import::model::CategoryFallback;
///
/// let config = DriverConfig::new()
///     .with_source_prefix("FUCR")
///     .with_category_fallback(CategoryFallback::Strict);
/// assert_eq!(config.source_for(108), "FUCR106");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DriverConfig {
    /// Prefix of the provenance source id
    pub source_prefix: String,

    /// Subtracted from the PDF page number to get the printed page number
    pub page_offset: u32,

    /// Pages with more tokens than this are refused
    pub max_page_tokens: usize,

    /// How weapon grammars treat unrecognized category names
    pub category_fallback: CategoryFallback,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            source_prefix: DEFAULT_SOURCE_PREFIX.to_string(),
            page_offset: DEFAULT_PAGE_OFFSET,
            max_page_tokens: DEFAULT_MAX_PAGE_TOKENS,
            category_fallback: CategoryFallback::default(),
        }
    }
}

impl DriverConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the provenance prefix
    pub fn with_source_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.source_prefix = prefix.into();
        self
    }

    /// Set the page number offset
    pub fn with_page_offset(mut self, offset: u32) -> Self {
        self.page_offset = offset;
        self
    }

    /// Set the token limit per page
    pub fn with_max_page_tokens(mut self, max: usize) -> Self {
        self.max_page_tokens = max;
        self
    }

    /// Set the weapon category policy
    pub fn with_category_fallback(mut self, fallback: CategoryFallback) -> Self {
        self.category_fallback = fallback;
        self
    }

    /// Provenance source id of a PDF page
    pub fn source_for(&self, page: u32) -> String {
        format!("{}{}", self.source_prefix, page.saturating_sub(self.page_offset))
    }
}
