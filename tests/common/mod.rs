//! Hand-built page fixtures shared by the integration tests
//!
//! Token fonts carry the subset prefix PDF embedding adds (`ABCDEF+`), as
//! real pages do.

#![allow(dead_code)]

use fabula_import::combinator::{Image, Position, Token};

pub fn art() -> Token {
    Token::image(Image::new(2, 2, vec![0u8; 16]), Position { x: 40.0, y: 80.0 })
}

pub fn body(s: &str) -> Token {
    Token::text(s, "ABCDEF+PTSans-Narrow")
}

pub fn heading(s: &str) -> Token {
    Token::text(s, "ABCDEF+Antonio-Bold")
}

pub fn italic(s: &str) -> Token {
    Token::text(s, "ABCDEF+MonotypeCorsiva")
}

pub fn sep() -> Token {
    Token::text("w", "ABCDEF+Wingdings-Regular")
}

pub fn martial() -> Token {
    Token::text("E", "ABCDEF+BasicShapes1")
}

pub fn icon(glyph: &str) -> Token {
    Token::text(glyph, "ABCDEF+FabulaUltimaicons-Regular")
}

pub fn headings(words: &[&str]) -> Vec<Token> {
    words.iter().map(|w| heading(w)).collect()
}

pub fn watermark() -> Token {
    heading("Jane Doe (Order #4242)")
}

/// `【A + B】` with an optional `+N`
pub fn accuracy(pair: &str, bonus: Option<&str>) -> Vec<Token> {
    let mut tokens = headings(&["【", pair, "】"]);
    tokens.extend(bonus.map(heading));
    tokens
}

pub fn damage(value: &str) -> Vec<Token> {
    headings(&["【", value, "】"])
}

// ============================================================================
// Equipment pages
// ============================================================================

pub fn consumables_page() -> Vec<Token> {
    let mut page = vec![art(), body("Consumables can be used during conflicts.")];
    page.extend(headings(&["ITEM", "CUSTO DE PI", "EFEITO", "Tonics"]));
    page.extend([art(), heading("Elixir"), heading("3"), body("Recover 50 Mind Points.")]);
    page.extend([art(), heading("Remedy"), heading("3"), body("Recover 50 Hit Points")]);
    page.push(body(", then end a status effect."));
    page.push(heading("Tents"));
    page.extend([art(), heading("Magic"), heading("Tent"), heading("4")]);
    page.push(body("Rest anywhere."));
    page.extend([heading("108"), heading("W"), watermark()]);
    page
}

fn weapon_row(
    name: &str,
    extras: Vec<Token>,
    cost: &str,
    accuracy_tokens: Vec<Token>,
    damage_tokens: Vec<Token>,
    words: [&str; 3],
    description: &str,
) -> Vec<Token> {
    let mut row = vec![art(), heading(name)];
    row.extend(extras);
    row.push(heading(cost));
    row.extend(accuracy_tokens);
    row.extend(damage_tokens);
    row.extend([heading(words[0]), heading(words[1]), sep(), heading(words[2]), sep()]);
    row.push(body(description));
    row
}

pub fn basic_weapons_page() -> Vec<Token> {
    let mut page = vec![art()];
    page.extend(headings(&["ARMAS BÁSICAS", "ARMA", "CUSTO", "PRECISÃO", "DANO"]));
    page.push(heading("Categoria de Espadas"));
    page.extend(weapon_row(
        "Bronze Sword",
        vec![martial()],
        "150 z",
        accuracy("DEX + MIG", None),
        damage("HR + 6"),
        ["físico", "Uma mão", "Corpo a corpo"],
        "No quality.",
    ));
    page.push(heading("Arcane Category"));
    page.extend(weapon_row(
        "Staff",
        vec![],
        "100 z",
        accuracy("WLP + WLP", None),
        damage("HR + 6"),
        ["physical", "Two-handed", "Melee"],
        "No quality.",
    ));
    page.extend(headings(&[
        "135", "W", "5", "5", "REGRAS DO JOGO", "CAPÍTULO", "CAPÍTULO",
    ]));
    page.push(watermark());
    page
}

pub fn rare_weapons_page() -> Vec<Token> {
    let mut page = vec![art()];
    page.extend(headings(&["SAMPLE RARE SWORD WEAPONS", "WEAPON", "COST", "ACCURACY", "DAMAGE"]));
    page.extend(weapon_row(
        "Flamberge",
        vec![heading("★"), martial()],
        "1.200 z",
        accuracy("DEX + MIG", Some("+1")),
        damage("HR + 10"),
        ["fire", "Two-handed", "Melee"],
        "Deals fire damage.",
    ));
    page.extend([heading("276"), watermark()]);
    page
}

pub fn armor_page() -> Vec<Token> {
    let mut page = vec![art()];
    page.extend(headings(&["ARMADURAS BÁSICAS", "ARMADURA", "CUSTO", "DEFESA", "DEF.M", "INICIATIVA"]));
    page.extend([art(), heading("Travel Garb"), heading("100 z")]);
    page.extend(headings(&["Dado de DES", "Dado de AST", "-"]));
    page.push(body("No quality."));
    page.extend([art(), heading("Bronze Plate"), martial(), heading("500 z")]);
    page.extend(headings(&["11", "Dado de AST +1", "-2"]));
    page.push(body("No quality."));
    page.extend([heading("136"), heading("W"), watermark()]);
    page
}

pub fn shield_page() -> Vec<Token> {
    let mut page = vec![art()];
    page.extend(headings(&["ESCUDOS BÁSICOS", "ESCUDO", "CUSTO", "DEF", "M.DEF", "INIC."]));
    page.extend([art(), heading("Bronze Shield"), martial(), heading("100 z")]);
    page.extend(headings(&["+2", "-", "-"]));
    page.push(body("No quality."));
    page.extend([italic("A shield"), italic("is a friend.")]);
    page.extend([heading("137"), watermark()]);
    page
}

pub fn accessories_page() -> Vec<Token> {
    let mut page = vec![
        body("Accessories are small trinkets"),
        body("worn by adventurers."),
    ];
    page.extend(headings(&["ACESSÓRIOS", "ACESSÓRIO", "CUSTO", "EFEITO"]));
    page.extend([art(), heading("Gold Ring"), heading("1.000 z"), body("Once per scene, reroll.")]);
    page.extend([art(), heading("Pendant"), heading("★"), heading("500 z"), body("Grants +1 M.DEF.")]);
    page.extend([art(), heading("290"), heading("W"), watermark()]);
    page
}

// ============================================================================
// Bestiary
// ============================================================================

pub fn beast(name: &str) -> Vec<Token> {
    let mut tokens = vec![art(), heading(name), heading("Lv. 5"), sep(), heading("Humanoid")];
    tokens.push(body("A small green menace."));
    tokens.extend([heading("Typical Traits:"), heading("cunning, greedy.")]);
    tokens.extend(headings(&["DEX d8", "INS d6", "MIG d8", "WLP d6", "HP", "45"]));
    tokens.extend([sep(), heading("22")]);
    tokens.extend(headings(&["MP", "30", "Init. 7", "DEF +1", "M.DEF +0"]));
    for glyph in ["p", "a", "VU", "b", "d", "e", "f", "RS", "i", "l", "t", "IM"] {
        tokens.push(icon(glyph));
    }
    tokens.extend(headings(&["Equipment:", "dagger, leather armor."]));

    tokens.push(heading("BASIC ATTACKS"));
    tokens.extend([Token::text("$", "ABCDEF+Evilz"), heading("Rusty Knife"), sep()]);
    tokens.extend(accuracy("DEX + INS", Some("+1")));
    tokens.push(sep());
    tokens.extend(damage("HR + 5"));
    tokens.extend([heading("physical"), body("Deals damage.")]);

    tokens.push(heading("SPELLS"));
    tokens.extend([icon("C"), heading("Ember"), Token::text("r", "ABCDEF+Heydings-Icons"), sep()]);
    tokens.extend(accuracy("INS + WLP", None));
    tokens.extend([sep(), heading("10 MP"), sep(), heading("One creature"), sep()]);
    tokens.extend([heading("Instantaneous"), heading(".")]);
    tokens.push(body("Deals fire damage."));
    tokens.extend([heading("Opportunity:"), body("The target is dazed.")]);

    tokens.push(heading("OTHER ACTIONS"));
    tokens.extend([icon("S"), heading("Steal"), sep(), body("Takes an item.")]);

    tokens.push(heading("SPECIAL RULES"));
    tokens.extend([heading("Cowardly"), sep(), body("Flees when in crisis.")]);
    tokens
}

pub fn bestiary_footer() -> Vec<Token> {
    let mut tokens = headings(&[
        "342", "W", "10", "10", "BESTIÁRIO", "CAPÍTULO", "CAPÍTULO",
    ]);
    tokens.push(watermark());
    tokens
}

pub fn bestiary_page(names: &[&str]) -> Vec<Token> {
    let mut page = vec![art(), heading("Goblins of the Wild"), art()];
    for name in names {
        page.extend(beast(name));
    }
    page.extend(bestiary_footer());
    page
}
