//! Integration tests for the page grammars
//!
//! Each test runs a category grammar over a hand-built page and checks that
//! it resolves to exactly one full-page result with the expected records.

mod common;

use common::*;
use fabula_import::combinator::{resolve, Cursor, Resolution, Token};
use fabula_import::grammar::{
    accessories_page, armor_page, basic_weapons_page, bestiary_page, consumables_page,
    rare_weapons_page, shield_page,
};
use fabula_import::model::{
    Accuracy, Affinity, CategoryFallback, DamageType, Distance, Handed, Stat, WeaponCategory,
};

fn accept<T>(resolution: Resolution<T>) -> T {
    match resolution {
        Resolution::Accepted(value) => value,
        Resolution::Rejected { failures } => panic!("page rejected: {:?}", failures),
        Resolution::Ambiguous { count, .. } => panic!("page ambiguous: {} parses", count),
    }
}

fn page(tokens: Vec<Token>) -> Cursor {
    Cursor::new(tokens)
}

// ============================================================================
// Equipment
// ============================================================================

#[test]
fn test_consumables_page() {
    let groups = accept(resolve(consumables_page().parse(&page(common::consumables_page()))));
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].heading, "Tonics");
    assert_eq!(groups[0].items.len(), 2);
    assert_eq!(groups[0].items[0].name, "Elixir");
    assert_eq!(groups[0].items[0].ip_cost, 3);
    assert_eq!(
        groups[0].items[1].description,
        "Recover 50 Hit Points, then end a status effect."
    );
    assert_eq!(groups[1].items[0].name, "Magic Tent");
    assert_eq!(groups[1].items[0].ip_cost, 4);
}

#[test]
fn test_basic_weapons_page() {
    let parser = basic_weapons_page(CategoryFallback::Strict);
    let weapons = accept(resolve(parser.parse(&page(common::basic_weapons_page()))));
    assert_eq!(weapons.len(), 2);

    let sword = &weapons[0];
    assert_eq!(sword.name, "Bronze Sword");
    assert_eq!(sword.category, WeaponCategory::Sword);
    assert!(sword.martial);
    assert_eq!(sword.cost, 150);
    assert_eq!(
        sword.accuracy,
        Accuracy {
            primary: Stat::Dex,
            secondary: Stat::Mig,
            bonus: 0
        }
    );
    assert_eq!(sword.damage, 6);
    assert_eq!(sword.damage_type, DamageType::Physical);
    assert_eq!(sword.hands, Handed::OneHanded);
    assert_eq!(sword.distance, Distance::Melee);

    let staff = &weapons[1];
    assert_eq!(staff.category, WeaponCategory::Arcane);
    assert!(!staff.martial);
    assert_eq!(staff.hands, Handed::TwoHanded);
}

#[test]
fn test_rare_weapons_page() {
    let parser = rare_weapons_page(CategoryFallback::Strict);
    let weapons = accept(resolve(parser.parse(&page(common::rare_weapons_page()))));
    assert_eq!(weapons.len(), 1);
    assert_eq!(weapons[0].category, WeaponCategory::Sword);
    assert_eq!(weapons[0].cost, 1200);
    assert_eq!(weapons[0].accuracy.bonus, 1);
    assert_eq!(weapons[0].damage_type, DamageType::Fire);
}

#[test]
fn test_unknown_category_policy() {
    let mut tokens = common::basic_weapons_page();
    for token in tokens.iter_mut() {
        if token.as_text().map(|t| t.text.as_str()) == Some("Arcane Category") {
            *token = heading("Mystery Category");
        }
    }
    let strict = basic_weapons_page(CategoryFallback::Strict);
    assert!(matches!(
        resolve(strict.parse(&page(tokens.clone()))),
        Resolution::Rejected { .. }
    ));

    let lenient = basic_weapons_page(CategoryFallback::Default(WeaponCategory::Heavy));
    let weapons = accept(resolve(lenient.parse(&page(tokens))));
    assert_eq!(weapons[1].category, WeaponCategory::Heavy);
}

#[test]
fn test_armor_page() {
    let armor = accept(resolve(armor_page().parse(&page(common::armor_page()))));
    assert_eq!(armor.len(), 2);
    assert_eq!((armor[0].def, armor[0].mdef, armor[0].init), (0, 0, 0));
    assert!(!armor[0].martial);
    assert_eq!(armor[1].name, "Bronze Plate");
    assert!(armor[1].martial);
    assert_eq!((armor[1].def, armor[1].mdef, armor[1].init), (11, 1, 2));
}

#[test]
fn test_shield_page_with_flavor_lines() {
    let shields = accept(resolve(shield_page().parse(&page(common::shield_page()))));
    assert_eq!(shields.len(), 1);
    assert_eq!(shields[0].def, 2);
    assert_eq!(shields[0].mdef, 0);
    assert_eq!(shields[0].description, "No quality.");
}

#[test]
fn test_accessories_page_skips_intro() {
    let accessories = accept(resolve(accessories_page().parse(&page(common::accessories_page()))));
    assert_eq!(accessories.len(), 2);
    assert_eq!(accessories[0].cost, 1000);
    assert_eq!(accessories[1].name, "Pendant");
    assert_eq!(accessories[1].description, "Grants +1 M.DEF.");
}

#[test]
fn test_truncated_page_is_rejected() {
    let mut tokens = common::armor_page();
    tokens.pop();
    let resolution = resolve(armor_page().parse(&page(tokens)));
    match resolution {
        Resolution::Rejected { failures } => assert!(!failures.is_empty()),
        other => panic!("expected rejection, got {:?}", other.is_accepted()),
    }
}

// ============================================================================
// Bestiary
// ============================================================================

#[test]
fn test_bestiary_single_beast() {
    let beasts = accept(resolve(bestiary_page().parse(&page(common::bestiary_page(&["Goblin"])))));
    assert_eq!(beasts.len(), 1);

    let goblin = &beasts[0];
    assert_eq!(goblin.name, "Goblin");
    assert_eq!(goblin.level, 5);
    assert_eq!(goblin.kind, "Humanoid");
    assert_eq!(goblin.description, "A small green menace.");
    assert_eq!(goblin.traits, "cunning, greedy.");

    let attributes = goblin.attributes;
    assert_eq!((attributes.dex, attributes.ins, attributes.mig, attributes.wlp), (8, 6, 8, 6));
    assert_eq!((attributes.max_hp, attributes.crisis, attributes.max_mp), (45, 22, 30));
    assert_eq!((attributes.init, attributes.def, attributes.mdef), (7, 1, 0));

    assert_eq!(goblin.resistances.physical, Affinity::Normal);
    assert_eq!(goblin.resistances.air, Affinity::Vulnerable);
    assert_eq!(goblin.resistances.fire, Affinity::Resist);
    assert_eq!(goblin.resistances.poison, Affinity::Immune);

    assert_eq!(
        goblin.equipment,
        Some(vec!["dagger".to_string(), "leather armor".to_string()])
    );

    assert_eq!(goblin.attacks.len(), 1);
    let knife = &goblin.attacks[0];
    assert_eq!(knife.range, Distance::Melee);
    assert_eq!(knife.accuracy.bonus, 1);
    assert_eq!(knife.damage, 5);
    assert_eq!(knife.damage_type, Some(DamageType::Physical));

    assert_eq!(goblin.spells.len(), 1);
    let ember = &goblin.spells[0];
    assert_eq!(ember.mp, "10");
    assert_eq!(ember.duration, "instant");
    assert_eq!(ember.accuracy.map(|a| a.primary), Some(Stat::Ins));
    assert_eq!(ember.opportunity.as_deref(), Some("The target is dazed."));

    assert_eq!(goblin.other_actions.len(), 1);
    assert_eq!(goblin.other_actions[0].name, "Steal");
    assert_eq!(goblin.special_rules[0].description, "Flees when in crisis.");
}

#[test]
fn test_bestiary_several_beasts() {
    let tokens = common::bestiary_page(&["Goblin", "Orc", "Troll"]);
    let beasts = accept(resolve(bestiary_page().parse(&page(tokens))));
    let names: Vec<&str> = beasts.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Goblin", "Orc", "Troll"]);
}

#[test]
fn test_bestiary_optional_sections() {
    let mut tokens = vec![art()];
    tokens.extend(beast("Slime"));
    // drop everything from the equipment line on
    let cut = tokens
        .iter()
        .position(|t| t.as_text().map(|s| s.text.as_str()) == Some("Equipment:"))
        .unwrap_or(tokens.len());
    tokens.truncate(cut);
    tokens.extend(bestiary_footer());

    let beasts = accept(resolve(bestiary_page().parse(&page(tokens))));
    assert_eq!(beasts[0].equipment, None);
    assert!(beasts[0].attacks.is_empty());
    assert!(beasts[0].spells.is_empty());
    assert!(beasts[0].special_rules.is_empty());
}

#[test]
fn test_bestiary_without_footer_is_rejected() {
    let mut tokens = common::bestiary_page(&["Goblin"]);
    tokens.pop();
    assert!(!resolve(bestiary_page().parse(&page(tokens))).is_accepted());
}

#[test]
fn test_malformed_later_beast_is_dropped() {
    let mut orc = beast("Orc");
    let hp = orc
        .iter()
        .position(|t| t.as_text().map(|s| s.text.as_str()) == Some("HP"))
        .unwrap_or(orc.len());
    orc.remove(hp);

    let mut tokens = vec![art(), heading("Goblins of the Wild"), art()];
    tokens.extend(beast("Goblin"));
    tokens.extend(orc);
    tokens.extend(bestiary_footer());

    let beasts = accept(resolve(bestiary_page().parse(&page(tokens))));
    let names: Vec<&str> = beasts.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Goblin"]);
}
