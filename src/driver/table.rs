//! Page table: which grammar runs on which page
//!
//! A table maps PDF page numbers to a content category and the folder path
//! its records are filed under. The core rulebook's table is built in;
//! other books can supply one as JSON:
//!
//! ```json
//! { "108": { "category": "consumables", "folders": ["Equipment", "Consumables"] } }
//! ```

use super::error::DriverError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Content category of a page, selecting its grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageCategory {
    /// Consumables table
    Consumables,
    /// Basic weapons tables
    BasicWeapons,
    /// Rare weapons tables
    RareWeapons,
    /// Armor table
    Armor,
    /// Shield table
    Shields,
    /// Accessories table
    Accessories,
    /// Bestiary stat blocks
    Bestiary,
}

/// Table entry for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Grammar to run
    pub category: PageCategory,
    /// Folder path records are filed under
    pub folders: Vec<String>,
}

impl PageEntry {
    /// Create an entry
    pub fn new(category: PageCategory, folders: &[&str]) -> Self {
        Self {
            category,
            folders: folders.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Page number to entry, ordered by page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageTable {
    entries: BTreeMap<u32, PageEntry>,
}

impl PageTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the entry for `page`
    pub fn with_page(mut self, page: u32, entry: PageEntry) -> Self {
        self.entries.insert(page, entry);
        self
    }

    /// Supported pages of the core rulebook
    pub fn core_rulebook() -> Self {
        use PageCategory::*;
        let mut table = Self::new()
            .with_page(108, PageEntry::new(Consumables, &["Equipment", "Consumables"]))
            .with_page(134, PageEntry::new(BasicWeapons, &["Equipment", "Weapons", "Basic"]))
            .with_page(135, PageEntry::new(BasicWeapons, &["Equipment", "Weapons", "Basic"]))
            .with_page(136, PageEntry::new(Armor, &["Equipment", "Armors", "Basic"]))
            .with_page(137, PageEntry::new(Shields, &["Equipment", "Shields", "Basic"]));
        for page in 274..=283 {
            table = table.with_page(page, PageEntry::new(RareWeapons, &["Equipment", "Weapons", "Rare"]));
        }
        table = table
            .with_page(285, PageEntry::new(Armor, &["Equipment", "Armors", "Rare"]))
            .with_page(286, PageEntry::new(Armor, &["Equipment", "Armors", "Rare"]))
            .with_page(287, PageEntry::new(Shields, &["Equipment", "Shields", "Rare"]));
        for page in 289..=291 {
            table = table.with_page(page, PageEntry::new(Accessories, &["Equipment", "Accessories"]));
        }
        for page in 328..=357 {
            table = table.with_page(page, PageEntry::new(Bestiary, &["Bestiary"]));
        }
        table
    }

    /// Read a table from JSON
    ///
    /// Every entry needs at least one folder.
    pub fn from_json(json: &str) -> Result<Self, DriverError> {
        let table: PageTable =
            serde_json::from_str(json).map_err(|e| DriverError::InvalidPageTable {
                reason: e.to_string(),
            })?;
        if let Some((page, _)) = table.entries.iter().find(|(_, e)| e.folders.is_empty()) {
            return Err(DriverError::InvalidPageTable {
                reason: format!("page {} has no folders", page),
            });
        }
        Ok(table)
    }

    /// Entry for `page`
    pub fn get(&self, page: u32) -> Option<&PageEntry> {
        self.entries.get(&page)
    }

    /// All pages, ascending
    pub fn pages(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no pages
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
