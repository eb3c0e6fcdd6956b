//! Consumable items (potions, elixirs, tonics)

use crate::combinator::Image;
use serde::{Deserialize, Serialize};

/// A consumable costing inventory points to use
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumable {
    /// Item artwork
    pub image: Image,
    /// Item name
    pub name: String,
    /// Inventory point cost
    pub ip_cost: u32,
    /// Effect text
    pub description: String,
}

/// Consumables listed under one sub-heading of the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumableGroup {
    /// Sub-heading, e.g. "Potions"
    pub heading: String,
    /// Items under the heading
    pub items: Vec<Consumable>,
}
