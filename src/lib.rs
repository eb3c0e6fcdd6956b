//! fabula-import - Page grammars for a bilingual TTRPG rulebook
//!
//! This crate turns the token stream of a rulebook page (text runs with their
//! fonts, plus embedded images) into typed records: consumables, weapons,
//! armor, shields, accessories and bestiary entries. It provides:
//! - Backtracking parser combinators that keep every alternative
//! - Exactly-one resolution at grammar boundaries
//! - Bilingual alias tables for categories, damage types and stats
//! - Per-category page grammars
//! - A page driver with a lease-style page source and a JSON record sink
//!
//! ## Quick Start
//!
//! ```rust
//! use fabula_import::combinator::{resolve, text, Cursor, Resolution, Token};
//!
//! let page = Cursor::new(vec![Token::text("ARMADURA", "Antonio-Bold")]);
//! let outcomes = text("ARMADURA").parse(&page);
//! assert!(matches!(resolve(outcomes), Resolution::Accepted(_)));
//! ```
//!
//! ## Running Pages
//!
//! ```rust,ignore
//! use fabula_import::driver::{Driver, DriverConfig, JsonSink, PageTable};
//!
//! let driver = Driver::new(DriverConfig::new(), PageTable::core_rulebook());
//! let report = driver.run_page(&source, 108)?;
//! report.persist(&JsonSink, Path::new("assets"))?;
//! ```
//!
//! ## Feature Flags
//!
//! - `logging` - Enable debug logging using the `log` crate
//! - `parallel` - Run page batches on a rayon thread pool

// Lint configuration for production quality
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(clippy::module_inception)]
#![allow(clippy::redundant_closure)]

/// Logging macros - no-op when logging feature is disabled
#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Logging macros - use log crate when logging feature is enabled
#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "logging")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

// Prelude module for convenient imports
pub mod prelude;

pub mod combinator;
pub mod driver;
pub mod grammar;
pub mod model;
pub mod text;

/// Re-export commonly used types for convenience
pub use combinator::{resolve, Cursor, Outcome, ParseFailure, Parser, Resolution, Token};
pub use driver::{Driver, DriverConfig, DriverError, PageCategory, PageReport, PageTable};
pub use model::{Accessory, Armor, Beast, ConsumableGroup, Shield, Weapon};
