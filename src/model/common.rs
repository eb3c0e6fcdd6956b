//! Closed enumerations shared by the domain records
//!
//! Every enumeration here is reached from page text through an alias table
//! keyed by [`normalize_text`], so English and Portuguese spellings (and the
//! odd legacy spelling) land on the same variant. Unknown text yields
//! `None` and the calling parser fails.

use crate::text::normalize_text;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Build an alias table once
fn table<T: Copy>(entries: &[(&'static str, T)]) -> HashMap<&'static str, T> {
    entries.iter().copied().collect()
}

// ============================================================================
// Stats
// ============================================================================

/// One of the four primary attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    /// Dexterity (DEX / DES)
    Dex,
    /// Insight (INS / AST)
    Ins,
    /// Might (MIG / VIG)
    Mig,
    /// Willpower (WLP / VON)
    Wlp,
}

impl Stat {
    /// Resolve an English or Portuguese abbreviation
    pub fn from_code(code: &str) -> Option<Stat> {
        static ALIASES: OnceLock<HashMap<&'static str, Stat>> = OnceLock::new();
        let aliases = ALIASES.get_or_init(|| {
            table(&[
                ("dex", Stat::Dex),
                ("des", Stat::Dex),
                ("ins", Stat::Ins),
                ("ast", Stat::Ins),
                ("mig", Stat::Mig),
                ("vig", Stat::Mig),
                ("wlp", Stat::Wlp),
                ("von", Stat::Wlp),
            ])
        });
        aliases.get(normalize_text(code).as_str()).copied()
    }
}

/// Accuracy check: two attributes plus a flat bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accuracy {
    /// First attribute of the check
    pub primary: Stat,
    /// Second attribute of the check
    pub secondary: Stat,
    /// Flat bonus added to the roll
    pub bonus: u32,
}

// ============================================================================
// Damage types
// ============================================================================

/// Damage and resistance type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    /// Physical
    Physical,
    /// Air
    Air,
    /// Bolt
    Bolt,
    /// Dark
    Dark,
    /// Earth
    Earth,
    /// Fire
    Fire,
    /// Ice
    Ice,
    /// Light
    Light,
    /// Poison
    Poison,
}

impl DamageType {
    /// All types in the order the bestiary lists resistances
    pub const ALL: [DamageType; 9] = [
        DamageType::Physical,
        DamageType::Air,
        DamageType::Bolt,
        DamageType::Dark,
        DamageType::Earth,
        DamageType::Fire,
        DamageType::Ice,
        DamageType::Light,
        DamageType::Poison,
    ];

    /// Resolve a damage-type word (`"fire"`, `"de fogo"`, `"Físico"`)
    pub fn from_word(word: &str) -> Option<DamageType> {
        static WORDS: OnceLock<HashMap<&'static str, DamageType>> = OnceLock::new();
        let words = WORDS.get_or_init(|| {
            table(&[
                ("physical", DamageType::Physical),
                ("air", DamageType::Air),
                ("bolt", DamageType::Bolt),
                ("dark", DamageType::Dark),
                ("earth", DamageType::Earth),
                ("fire", DamageType::Fire),
                ("ice", DamageType::Ice),
                ("light", DamageType::Light),
                ("poison", DamageType::Poison),
                ("fisico", DamageType::Physical),
                ("ar", DamageType::Air),
                ("raio", DamageType::Bolt),
                ("trevas", DamageType::Dark),
                ("terra", DamageType::Earth),
                ("fogo", DamageType::Fire),
                ("gelo", DamageType::Ice),
                ("luz", DamageType::Light),
                ("veneno", DamageType::Poison),
            ])
        });
        let normalized = normalize_text(word);
        let key = ["de ", "do ", "da ", "dos ", "das "]
            .iter()
            .find_map(|article| normalized.strip_prefix(*article))
            .unwrap_or(normalized.as_str());
        words.get(key).copied()
    }

    /// Icon glyphs that stand for this type in resistance blocks
    pub fn icon_codes(self) -> &'static [&'static str] {
        match self {
            DamageType::Physical => &["p", "P"],
            DamageType::Air => &["a", "A"],
            DamageType::Bolt => &["b", "B"],
            DamageType::Dark => &["d", "D"],
            DamageType::Earth => &["e", "E"],
            DamageType::Fire => &["f", "F"],
            DamageType::Ice => &["i", "I"],
            DamageType::Light => &["l", "L"],
            DamageType::Poison => &["t", "T"],
        }
    }

    /// Whether `glyph` is one of this type's icons
    pub fn is_icon(self, glyph: &str) -> bool {
        self.icon_codes().contains(&glyph)
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DamageType::Physical => "physical",
            DamageType::Air => "air",
            DamageType::Bolt => "bolt",
            DamageType::Dark => "dark",
            DamageType::Earth => "earth",
            DamageType::Fire => "fire",
            DamageType::Ice => "ice",
            DamageType::Light => "light",
            DamageType::Poison => "poison",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Affinities
// ============================================================================

/// Elemental affinity of a beast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Affinity {
    /// No special interaction (`N`)
    #[default]
    #[serde(rename = "N")]
    Normal,
    /// Vulnerable (`VU`)
    #[serde(rename = "VU")]
    Vulnerable,
    /// Resistant (`RS`, legacy `RE`)
    #[serde(rename = "RS")]
    Resist,
    /// Immune (`IM`)
    #[serde(rename = "IM")]
    Immune,
    /// Absorbs (`AB`)
    #[serde(rename = "AB")]
    Absorb,
}

impl Affinity {
    /// Resolve an affinity code; `RE` is the older spelling of `RS`
    pub fn from_code(code: &str) -> Option<Affinity> {
        match code {
            "N" => Some(Affinity::Normal),
            "VU" => Some(Affinity::Vulnerable),
            "RS" | "RE" => Some(Affinity::Resist),
            "IM" => Some(Affinity::Immune),
            "AB" => Some(Affinity::Absorb),
            _ => None,
        }
    }
}

/// Affinity per damage type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Resistances {
    /// Physical
    pub physical: Affinity,
    /// Air
    pub air: Affinity,
    /// Bolt
    pub bolt: Affinity,
    /// Dark
    pub dark: Affinity,
    /// Earth
    pub earth: Affinity,
    /// Fire
    pub fire: Affinity,
    /// Ice
    pub ice: Affinity,
    /// Light
    pub light: Affinity,
    /// Poison
    pub poison: Affinity,
}

impl Resistances {
    fn slot(&mut self, damage_type: DamageType) -> &mut Affinity {
        match damage_type {
            DamageType::Physical => &mut self.physical,
            DamageType::Air => &mut self.air,
            DamageType::Bolt => &mut self.bolt,
            DamageType::Dark => &mut self.dark,
            DamageType::Earth => &mut self.earth,
            DamageType::Fire => &mut self.fire,
            DamageType::Ice => &mut self.ice,
            DamageType::Light => &mut self.light,
            DamageType::Poison => &mut self.poison,
        }
    }

    /// Affinity for `damage_type`
    pub fn get(&self, damage_type: DamageType) -> Affinity {
        match damage_type {
            DamageType::Physical => self.physical,
            DamageType::Air => self.air,
            DamageType::Bolt => self.bolt,
            DamageType::Dark => self.dark,
            DamageType::Earth => self.earth,
            DamageType::Fire => self.fire,
            DamageType::Ice => self.ice,
            DamageType::Light => self.light,
            DamageType::Poison => self.poison,
        }
    }

    /// Set the affinity for `damage_type`
    pub fn set(&mut self, damage_type: DamageType, affinity: Affinity) {
        *self.slot(damage_type) = affinity;
    }
}

// ============================================================================
// Weapon attributes
// ============================================================================

/// Weapon category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponCategory {
    /// Arcane
    Arcane,
    /// Bow
    Bow,
    /// Brawling
    Brawling,
    /// Dagger
    Dagger,
    /// Firearm
    Firearm,
    /// Flail
    Flail,
    /// Heavy
    Heavy,
    /// Spear
    Spear,
    /// Sword
    Sword,
    /// Thrown
    Thrown,
}

impl WeaponCategory {
    /// Resolve a category name as printed in a title or banner
    ///
    /// Accepts English names, Portuguese singular/plural names, and the
    /// `"Categoria de"`/`"Armas de"` prefixes titles carry.
    pub fn from_name(raw: &str) -> Option<WeaponCategory> {
        static ALIASES: OnceLock<HashMap<&'static str, WeaponCategory>> = OnceLock::new();
        let aliases = ALIASES.get_or_init(|| {
            table(&[
                ("arcane", WeaponCategory::Arcane),
                ("bow", WeaponCategory::Bow),
                ("brawling", WeaponCategory::Brawling),
                ("dagger", WeaponCategory::Dagger),
                ("firearm", WeaponCategory::Firearm),
                ("flail", WeaponCategory::Flail),
                ("heavy", WeaponCategory::Heavy),
                ("spear", WeaponCategory::Spear),
                ("sword", WeaponCategory::Sword),
                ("thrown", WeaponCategory::Thrown),
                ("arcana", WeaponCategory::Arcane),
                ("arcano", WeaponCategory::Arcane),
                ("arcanas", WeaponCategory::Arcane),
                ("arcanos", WeaponCategory::Arcane),
                ("arco", WeaponCategory::Bow),
                ("arcos", WeaponCategory::Bow),
                ("luta", WeaponCategory::Brawling),
                ("adaga", WeaponCategory::Dagger),
                ("adagas", WeaponCategory::Dagger),
                ("armas de fogo", WeaponCategory::Firearm),
                ("fogo", WeaponCategory::Firearm),
                ("malhos", WeaponCategory::Flail),
                ("pesada", WeaponCategory::Heavy),
                ("pesadas", WeaponCategory::Heavy),
                ("lanca", WeaponCategory::Spear),
                ("lancas", WeaponCategory::Spear),
                ("espada", WeaponCategory::Sword),
                ("espadas", WeaponCategory::Sword),
                ("arremesso", WeaponCategory::Thrown),
                ("arremessada", WeaponCategory::Thrown),
                ("arremessadas", WeaponCategory::Thrown),
            ])
        });
        let normalized = normalize_text(raw);
        if let Some(category) = aliases.get(normalized.as_str()) {
            return Some(*category);
        }
        let mut key = normalized.as_str();
        for prefix in ["categorias de ", "categoria de ", "armas de ", "armas "] {
            if let Some(rest) = key.strip_prefix(prefix) {
                key = rest.trim_start();
                break;
            }
        }
        let key = key.strip_suffix(" category").unwrap_or(key).trim_end();
        aliases.get(key).copied()
    }
}

/// What to do with a category title no alias matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFallback {
    /// Reject the title; the category parser fails
    Strict,
    /// Use the given category for the weapons that follow
    Default(WeaponCategory),
}

impl Default for CategoryFallback {
    fn default() -> Self {
        CategoryFallback::Default(WeaponCategory::Arcane)
    }
}

impl CategoryFallback {
    /// Resolve `raw` under this policy
    pub fn resolve(self, raw: &str) -> Option<WeaponCategory> {
        match (WeaponCategory::from_name(raw), self) {
            (Some(category), _) => Some(category),
            (None, CategoryFallback::Strict) => None,
            (None, CategoryFallback::Default(category)) => {
                log_warn!("unrecognized weapon category {:?}, using {:?}", raw, category);
                Some(category)
            }
        }
    }
}

/// One- or two-handed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Handed {
    /// One-handed
    OneHanded,
    /// Two-handed
    TwoHanded,
}

impl Handed {
    /// Resolve `"One-handed"`, `"Duas mãos"` and friends
    pub fn from_word(word: &str) -> Option<Handed> {
        match normalize_text(word).as_str() {
            "one-handed" | "one handed" | "uma mao" => Some(Handed::OneHanded),
            "two-handed" | "two handed" | "duas maos" => Some(Handed::TwoHanded),
            _ => None,
        }
    }
}

/// Melee or ranged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distance {
    /// Melee
    Melee,
    /// Ranged
    Ranged,
}

impl Distance {
    /// Resolve `"Melee"`, `"À distância"` and friends
    pub fn from_word(word: &str) -> Option<Distance> {
        match normalize_text(word).as_str() {
            "melee" | "corpo a corpo" => Some(Distance::Melee),
            "ranged" | "a distancia" | "distancia" => Some(Distance::Ranged),
            _ => None,
        }
    }
}
