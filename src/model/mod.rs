//! Domain records built by the page grammars
//!
//! Records are plain values: grammars construct them in map actions and
//! nothing mutates them afterwards.

pub mod accessory;
pub mod armor;
pub mod beast;
pub mod common;
pub mod consumable;
pub mod shield;
pub mod weapon;

pub use accessory::Accessory;
pub use armor::Armor;
pub use beast::{Attack, Beast, BeastAttributes, SpecialRule, Spell};
pub use common::{
    Accuracy, Affinity, CategoryFallback, DamageType, Distance, Handed, Resistances, Stat,
    WeaponCategory,
};
pub use consumable::{Consumable, ConsumableGroup};
pub use shield::Shield;
pub use weapon::Weapon;
