//! Weapons

use super::common::{Accuracy, DamageType, Distance, Handed, WeaponCategory};
use crate::combinator::Image;
use serde::{Deserialize, Serialize};

/// One row of a weapon table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    /// Item artwork
    pub image: Image,
    /// Weapon name
    pub name: String,
    /// Whether wielding it requires martial training
    pub martial: bool,
    /// Cost in zenit
    pub cost: u32,
    /// Accuracy check
    pub accuracy: Accuracy,
    /// Flat damage added to the high roll
    pub damage: u32,
    /// Damage type
    pub damage_type: DamageType,
    /// Hands required
    pub hands: Handed,
    /// Melee or ranged
    pub distance: Distance,
    /// Category from the title the row sits under
    pub category: WeaponCategory,
    /// Quality text
    pub description: String,
}

/// Weapon row before its category title has been applied
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WeaponRow {
    pub image: Image,
    pub name: String,
    pub martial: bool,
    pub cost: u32,
    pub accuracy: Accuracy,
    pub damage: u32,
    pub damage_type: DamageType,
    pub hands: Handed,
    pub distance: Distance,
    pub description: String,
}

impl WeaponRow {
    pub(crate) fn into_weapon(self, category: WeaponCategory) -> Weapon {
        Weapon {
            image: self.image,
            name: self.name,
            martial: self.martial,
            cost: self.cost,
            accuracy: self.accuracy,
            damage: self.damage,
            damage_type: self.damage_type,
            hands: self.hands,
            distance: self.distance,
            category,
            description: self.description,
        }
    }
}
