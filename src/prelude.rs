//! Prelude module for convenient imports
//!
//! Importing this module with a wildcard brings the combinators, the record
//! types and the driver into scope:
//!
//! ```
//! use fabula_import::prelude::*;
//! ```
//!
//! # Re-exported Items
//!
//! ## Combinators
//! - [`Parser`] - Shared parse function over a [`Cursor`]
//! - [`alternative()`], [`sequence()`], [`many()`], [`many1()`], [`optional()`]
//! - [`text()`], [`matches()`], [`string()`], [`image()`], [`end()`]
//! - [`resolve()`] and [`Resolution`]
//!
//! ## Records
//! - [`Weapon`], [`Armor`], [`Shield`], [`Accessory`], [`ConsumableGroup`], [`Beast`]
//!
//! ## Driver
//! - [`Driver`], [`DriverConfig`], [`PageTable`], [`PageReport`], [`DriverError`]

// ============================================================================
// Combinators
// ============================================================================

pub use crate::combinator::{
    alternative, end, image, keep_left, keep_right, many, many1, map, matches, optional, resolve,
    sequence, string, success, text, then, Cursor, Image, Outcome, ParseFailure, Parser,
    Resolution, StringToken, Token,
};

// ============================================================================
// Records
// ============================================================================

pub use crate::model::{
    Accessory, Affinity, Armor, Beast, Consumable, ConsumableGroup, DamageType, Resistances,
    Shield, Weapon, WeaponCategory,
};

// ============================================================================
// Driver
// ============================================================================

pub use crate::driver::{
    Driver, DriverConfig, DriverError, JsonSink, PageCategory, PageRecords, PageReport,
    PageSource, PageTable, RecordSink,
};
