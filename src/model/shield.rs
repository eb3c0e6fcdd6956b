//! Shields

use crate::combinator::Image;
use serde::{Deserialize, Serialize};

/// One row of a shield table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shield {
    /// Item artwork
    pub image: Image,
    /// Shield name
    pub name: String,
    /// Whether using it requires martial training
    pub martial: bool,
    /// Cost in zenit
    pub cost: u32,
    /// Defense bonus
    pub def: u32,
    /// Magic defense bonus
    pub mdef: u32,
    /// Initiative modifier
    pub init: u32,
    /// Quality text
    pub description: String,
}
