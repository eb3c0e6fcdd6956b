//! Page grammars
//!
//! One grammar per content category. Each has the same outline: a start
//! boundary that skips page art and checks the section header, one or more
//! records, and a footer that must run to the end of the page.
//!
//! # Module Organization
//!
//! - [`common`] - Column parsers shared by the equipment tables
//! - [`footer`] - Page footers and chapter running heads
//! - [`consumables`], [`weapons`], [`armor`], [`shields`], [`accessories`] - Equipment chapters
//! - [`bestiary`] - Stat blocks

pub mod accessories;
pub mod armor;
pub mod bestiary;
pub mod common;
pub mod consumables;
pub mod footer;
pub mod shields;
pub mod weapons;

pub use accessories::accessories_page;
pub use armor::armor_page;
pub use bestiary::bestiary_page;
pub use consumables::consumables_page;
pub use shields::shield_page;
pub use weapons::{basic_weapons_page, rare_weapons_page};
