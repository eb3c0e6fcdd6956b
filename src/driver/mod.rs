//! Page driver
//!
//! For a page number the driver looks up the page's category, loads its
//! tokens from a [`PageSource`], runs the category grammar and classifies
//! the outcome: exactly one full-page result is a success, none is a
//! failure, several are ambiguous. Failure and ambiguity are reports, not
//! errors, so a batch keeps going past them.
//!
//! # Example
//!
//! ```rust
//! use fabula_import::driver::{Driver, DriverConfig, MemorySource, PageReport, PageTable};
//!
//! let driver = Driver::new(DriverConfig::new(), PageTable::core_rulebook());
//! let source = MemorySource::new().with_page(108, Vec::new());
//! let report = driver.run_page(&source, 108);
//! assert!(matches!(report, Ok(PageReport::Failure { page: 108, .. })));
//! ```

pub mod config;
pub mod error;
pub mod sink;
pub mod source;
pub mod table;

pub use config::DriverConfig;
pub use error::DriverError;
pub use sink::{JsonSink, Provenance, RecordSink};
pub use source::{LoadedPage, MemorySource, PageLease, PageSource};
pub use table::{PageCategory, PageEntry, PageTable};

use crate::combinator::{resolve, Cursor, ParseFailure, Parser, Resolution};
use crate::grammar;
use crate::model::{Accessory, Armor, Beast, CategoryFallback, ConsumableGroup, Shield, Weapon};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Records parsed from one page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum PageRecords {
    /// Consumables, by group
    Consumables(Vec<ConsumableGroup>),
    /// Weapons, basic or rare
    Weapons(Vec<Weapon>),
    /// Armor
    Armor(Vec<Armor>),
    /// Shields
    Shields(Vec<Shield>),
    /// Accessories
    Accessories(Vec<Accessory>),
    /// Bestiary entries
    Beasts(Vec<Beast>),
}

impl PageRecords {
    /// Names of every record, in page order
    pub fn names(&self) -> Vec<&str> {
        match self {
            PageRecords::Consumables(groups) => groups
                .iter()
                .flat_map(|g| g.items.iter().map(|c| c.name.as_str()))
                .collect(),
            PageRecords::Weapons(v) => v.iter().map(|r| r.name.as_str()).collect(),
            PageRecords::Armor(v) => v.iter().map(|r| r.name.as_str()).collect(),
            PageRecords::Shields(v) => v.iter().map(|r| r.name.as_str()).collect(),
            PageRecords::Accessories(v) => v.iter().map(|r| r.name.as_str()).collect(),
            PageRecords::Beasts(v) => v.iter().map(|r| r.name.as_str()).collect(),
        }
    }

    /// Number of records; consumables count individually
    pub fn len(&self) -> usize {
        self.names().len()
    }

    /// Whether there are no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Deferred persistence of a successful page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveAction {
    /// Provenance written alongside the records
    pub provenance: Provenance,
}

impl SaveAction {
    /// Persist `records` under `asset_dir` through `sink`
    pub fn run(
        &self,
        records: &PageRecords,
        sink: &dyn RecordSink,
        asset_dir: &Path,
    ) -> Result<PathBuf, DriverError> {
        sink.persist(&self.provenance, records, asset_dir)
    }
}

/// Classified result of one page
///
/// A successful report keeps the page's lease, so page resources stay
/// pinned until the caller has saved the records and dropped the report.
/// Failed and ambiguous pages are released before the report is returned.
#[derive(Debug)]
pub enum PageReport {
    /// Exactly one full-page parse
    Success {
        /// PDF page number
        page: u32,
        /// Parsed records
        records: PageRecords,
        /// How to persist them
        save: SaveAction,
        /// Page resources, released on drop
        lease: PageLease,
    },
    /// No full-page parse
    Failure {
        /// PDF page number
        page: u32,
        /// Every failure from every branch
        errors: Vec<ParseFailure>,
    },
    /// Several full-page parses
    Ambiguous {
        /// PDF page number
        page: u32,
        /// Number of full-page parses
        count: usize,
        /// Every failure from every branch
        errors: Vec<ParseFailure>,
    },
}

impl PageReport {
    /// Page number
    pub fn page(&self) -> u32 {
        match self {
            PageReport::Success { page, .. }
            | PageReport::Failure { page, .. }
            | PageReport::Ambiguous { page, .. } => *page,
        }
    }

    /// Whether the page parsed
    pub fn is_success(&self) -> bool {
        matches!(self, PageReport::Success { .. })
    }

    /// Records of a successful page
    pub fn records(&self) -> Option<&PageRecords> {
        match self {
            PageReport::Success { records, .. } => Some(records),
            _ => None,
        }
    }

    /// Failures of an unsuccessful page
    pub fn errors(&self) -> &[ParseFailure] {
        match self {
            PageReport::Success { .. } => &[],
            PageReport::Failure { errors, .. } | PageReport::Ambiguous { errors, .. } => errors,
        }
    }

    /// Persist a successful page; other reports have nothing to save
    pub fn persist(
        &self,
        sink: &dyn RecordSink,
        asset_dir: &Path,
    ) -> Result<Option<PathBuf>, DriverError> {
        match self {
            PageReport::Success { records, save, .. } => save.run(records, sink, asset_dir).map(Some),
            _ => Ok(None),
        }
    }
}

/// Grammars for every category, built once and shared by all pages
struct Grammars {
    consumables: Parser<Vec<ConsumableGroup>>,
    basic_weapons: Parser<Vec<Weapon>>,
    rare_weapons: Parser<Vec<Weapon>>,
    armor: Parser<Vec<Armor>>,
    shields: Parser<Vec<Shield>>,
    accessories: Parser<Vec<Accessory>>,
    bestiary: Parser<Vec<Beast>>,
}

fn resolve_into<T>(
    parser: &Parser<T>,
    cursor: &Cursor,
    wrap: fn(T) -> PageRecords,
) -> Resolution<PageRecords>
where
    T: 'static,
{
    match resolve(parser.parse(cursor)) {
        Resolution::Accepted(value) => Resolution::Accepted(wrap(value)),
        Resolution::Rejected { failures } => Resolution::Rejected { failures },
        Resolution::Ambiguous { count, failures } => Resolution::Ambiguous { count, failures },
    }
}

impl Grammars {
    fn new(fallback: CategoryFallback) -> Self {
        Self {
            consumables: grammar::consumables_page(),
            basic_weapons: grammar::basic_weapons_page(fallback),
            rare_weapons: grammar::rare_weapons_page(fallback),
            armor: grammar::armor_page(),
            shields: grammar::shield_page(),
            accessories: grammar::accessories_page(),
            bestiary: grammar::bestiary_page(),
        }
    }

    fn run(&self, category: PageCategory, cursor: &Cursor) -> Resolution<PageRecords> {
        match category {
            PageCategory::Consumables => {
                resolve_into(&self.consumables, cursor, PageRecords::Consumables)
            }
            PageCategory::BasicWeapons => {
                resolve_into(&self.basic_weapons, cursor, PageRecords::Weapons)
            }
            PageCategory::RareWeapons => resolve_into(&self.rare_weapons, cursor, PageRecords::Weapons),
            PageCategory::Armor => resolve_into(&self.armor, cursor, PageRecords::Armor),
            PageCategory::Shields => resolve_into(&self.shields, cursor, PageRecords::Shields),
            PageCategory::Accessories => {
                resolve_into(&self.accessories, cursor, PageRecords::Accessories)
            }
            PageCategory::Bestiary => resolve_into(&self.bestiary, cursor, PageRecords::Beasts),
        }
    }
}

/// Runs page grammars and classifies their outcomes
pub struct Driver {
    config: DriverConfig,
    table: PageTable,
    grammars: Grammars,
}

impl Driver {
    /// Create a driver; grammars are built here, once
    pub fn new(config: DriverConfig, table: PageTable) -> Self {
        let grammars = Grammars::new(config.category_fallback);
        Self {
            config,
            table,
            grammars,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Page table in use
    pub fn table(&self) -> &PageTable {
        &self.table
    }

    /// Parse and classify one page
    ///
    /// The page's lease is released on every path except success, where it
    /// moves into the report.
    pub fn run_page<S>(&self, source: &S, page: u32) -> Result<PageReport, DriverError>
    where
        S: PageSource + ?Sized,
    {
        self.run_page_with(source, page, |category, cursor| {
            self.grammars.run(category, cursor)
        })
    }

    /// [`Driver::run_page`] with the category grammar supplied by the caller
    pub(crate) fn run_page_with<S, G>(
        &self,
        source: &S,
        page: u32,
        grammar: G,
    ) -> Result<PageReport, DriverError>
    where
        S: PageSource + ?Sized,
        G: Fn(PageCategory, &Cursor) -> Resolution<PageRecords>,
    {
        let entry = self.table.get(page).ok_or(DriverError::UnknownPage { page })?;
        let LoadedPage { tokens, lease } = source.load(page)?;
        if tokens.len() > self.config.max_page_tokens {
            return Err(DriverError::PageTooLarge {
                page,
                tokens: tokens.len(),
                max_tokens: self.config.max_page_tokens,
            });
        }

        log_debug!("parsing page {} as {:?} ({} tokens)", page, entry.category, tokens.len());
        let cursor = Cursor::new(tokens);
        let report = match grammar(entry.category, &cursor) {
            Resolution::Accepted(records) => PageReport::Success {
                page,
                save: SaveAction {
                    provenance: Provenance {
                        page,
                        source: self.config.source_for(page),
                        folders: entry.folders.clone(),
                    },
                },
                records,
                lease,
            },
            Resolution::Rejected { failures } => {
                lease.release();
                PageReport::Failure {
                    page,
                    errors: failures,
                }
            }
            Resolution::Ambiguous { count, failures } => {
                lease.release();
                PageReport::Ambiguous {
                    page,
                    count,
                    errors: failures,
                }
            }
        };
        log_debug!(
            "page {}: {}",
            page,
            match &report {
                PageReport::Success { records, .. } => format!("{} records", records.len()),
                PageReport::Failure { errors, .. } => format!("failed ({} errors)", errors.len()),
                PageReport::Ambiguous { count, .. } => format!("ambiguous ({} parses)", count),
            }
        );
        Ok(report)
    }

    /// Run several pages, in parallel with the `parallel` feature
    ///
    /// Results are in the same order as `pages`.
    #[cfg(feature = "parallel")]
    pub fn run_pages<S>(&self, source: &S, pages: &[u32]) -> Vec<Result<PageReport, DriverError>>
    where
        S: PageSource + Sync + ?Sized,
    {
        pages
            .par_iter()
            .map(|&page| self.run_page(source, page))
            .collect()
    }

    /// Run several pages, in order
    #[cfg(not(feature = "parallel"))]
    pub fn run_pages<S>(&self, source: &S, pages: &[u32]) -> Vec<Result<PageReport, DriverError>>
    where
        S: PageSource + Sync + ?Sized,
    {
        pages
            .iter()
            .map(|&page| self.run_page(source, page))
            .collect()
    }

    /// Run every page in the table
    pub fn run_all<S>(&self, source: &S) -> Vec<Result<PageReport, DriverError>>
    where
        S: PageSource + Sync + ?Sized,
    {
        let pages: Vec<u32> = self.table.pages().collect();
        self.run_pages(source, &pages)
    }
}
