//! Bestiary entries

use super::common::{Accuracy, DamageType, Distance, Resistances};
use crate::combinator::Image;
use serde::{Deserialize, Serialize};

/// Attribute block of a beast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeastAttributes {
    /// Dexterity die size
    pub dex: u8,
    /// Insight die size
    pub ins: u8,
    /// Might die size
    pub mig: u8,
    /// Willpower die size
    pub wlp: u8,
    /// Maximum hit points
    pub max_hp: u32,
    /// Crisis threshold (half of max HP as printed)
    pub crisis: u32,
    /// Maximum mind points
    pub max_mp: u32,
    /// Initiative
    pub init: u32,
    /// Defense bonus
    pub def: u32,
    /// Magic defense bonus
    pub mdef: u32,
}

/// A basic attack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attack {
    /// Melee or ranged
    pub range: Distance,
    /// Attack name
    pub name: String,
    /// Accuracy check
    pub accuracy: Accuracy,
    /// Flat damage; zero when the attack deals none
    pub damage: u32,
    /// Damage type, when printed
    pub damage_type: Option<DamageType>,
    /// Effect text
    pub description: String,
}

/// A spell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    /// Spell name
    pub name: String,
    /// Accuracy check for offensive spells
    pub accuracy: Option<Accuracy>,
    /// MP cost as printed without the unit (`"10"`, `"5 × T"`)
    pub mp: String,
    /// Target description
    pub target: String,
    /// Canonical duration (`instant`, `scene`, `nextTurn`) or the lower-cased text
    pub duration: String,
    /// Effect text
    pub description: String,
    /// Opportunity clause
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity: Option<String>,
}

/// A named rule or action with free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialRule {
    /// Rule name
    pub name: String,
    /// Rule text
    pub description: String,
}

/// One bestiary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beast {
    /// Portrait
    pub image: Image,
    /// Beast name
    pub name: String,
    /// Level
    pub level: u32,
    /// Species word (Beast, Construct, Demon...)
    pub kind: String,
    /// Flavor text
    pub description: String,
    /// Typical traits line
    pub traits: String,
    /// Attributes and derived scores
    pub attributes: BeastAttributes,
    /// Elemental affinities
    pub resistances: Resistances,
    /// Equipment list, when the entry has one
    pub equipment: Option<Vec<String>>,
    /// Basic attacks
    pub attacks: Vec<Attack>,
    /// Spells
    pub spells: Vec<Spell>,
    /// Other actions
    pub other_actions: Vec<SpecialRule>,
    /// Special rules
    pub special_rules: Vec<SpecialRule>,
}
