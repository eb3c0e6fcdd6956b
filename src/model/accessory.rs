//! Accessories

use crate::combinator::Image;
use serde::{Deserialize, Serialize};

/// One row of an accessory table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessory {
    /// Item artwork
    pub image: Image,
    /// Accessory name
    pub name: String,
    /// Cost in zenit
    pub cost: u32,
    /// Effect text
    pub description: String,
}
