//! Armor

use crate::combinator::Image;
use serde::{Deserialize, Serialize};

/// One row of an armor table
///
/// `def` and `mdef` hold either a flat score or, for armor that adds to an
/// attribute die, the modifier printed after the die (`"DEX Die +1"` -> 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armor {
    /// Item artwork
    pub image: Image,
    /// Armor name
    pub name: String,
    /// Whether wearing it requires martial training
    pub martial: bool,
    /// Cost in zenit
    pub cost: u32,
    /// Defense
    pub def: u32,
    /// Magic defense
    pub mdef: u32,
    /// Initiative modifier (printed as a penalty)
    pub init: u32,
    /// Quality text
    pub description: String,
}
