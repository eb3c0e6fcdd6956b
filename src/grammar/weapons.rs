//! Weapon pages
//!
//! Basic weapon pages list several categories, each introduced by a title
//! such as `Sword Category` / `Categoria de Espadas`. Rare weapon pages carry
//! one category in their banner (`SAMPLE RARE SWORD WEAPONS`).

use super::common::{
    accuracy, artwork, cost, damage, damage_type, description, distance, hands, localized,
    martial, name, optional_star, sep,
};
use super::footer::footer_with_chapter;
use crate::combinator::{
    alternative, end, keep_left, keep_right, many1, regex_cache, sequence, success, then,
    text_token, Parser,
};
use crate::model::weapon::WeaponRow;
use crate::model::{CategoryFallback, Weapon, WeaponCategory};

/// One weapon row, before its category is known
pub(crate) fn weapon_row() -> Parser<WeaponRow> {
    let identity = sequence((artwork(), name(), optional_star(), martial(), cost()));
    let stats = sequence((
        accuracy(),
        damage(),
        damage_type(),
        keep_left(hands(), sep()),
        keep_left(distance(), sep()),
        description(),
    ));
    then(identity, stats).map(
        |(
            (image, name, _, martial, cost),
            (accuracy, damage, damage_type, hands, distance, description),
        )| WeaponRow {
            image,
            name,
            martial,
            cost,
            accuracy,
            damage,
            damage_type,
            hands,
            distance,
            description,
        },
    )
}

/// Category named by a title token, if the token is a category title at all
fn category_title_name(text: &str) -> Option<&str> {
    text.strip_suffix(" Category")
        .or_else(|| text.strip_prefix("Categoria de "))
        .or_else(|| text.strip_prefix("Categorias de "))
}

/// Category title preceding a block of basic weapons
pub fn category_title(fallback: CategoryFallback) -> Parser<WeaponCategory> {
    text_token("weapon category title", move |t| {
        category_title_name(&t.text).and_then(|raw| fallback.resolve(raw))
    })
}

/// Category named by a rare-weapon banner
pub fn rare_banner(fallback: CategoryFallback) -> Parser<WeaponCategory> {
    let patterns = regex_cache::compile_all(&[
        r"^SAMPLE RARE (.+) WEAPONS$",
        r"^EXEMPLOS DE (.+) RAR[AO]S$",
    ]);
    text_token("rare weapons banner", move |t| {
        let raw = patterns
            .iter()
            .find_map(|r| r.captures(&t.text))
            .and_then(|c| c.get(1))?;
        fallback.resolve(raw.as_str())
    })
}

/// `WEAPON / COST / ACCURACY / DAMAGE`
fn weapon_columns() -> Parser<()> {
    sequence((
        localized("WEAPON", "ARMA"),
        localized("COST", "CUSTO"),
        localized("ACCURACY", "PRECISÃO"),
        localized("DAMAGE", "DANO"),
    ))
    .ignore()
}

fn basic_weapons_title() -> Parser<String> {
    localized("BASIC WEAPONS", "ARMAS BÁSICAS")
}

/// Title and columns, columns alone, or nothing
///
/// All three branches are kept; the category title that must follow prunes
/// the ones that stopped too early.
fn optional_weapon_header() -> Parser<()> {
    alternative([
        then(basic_weapons_title(), weapon_columns()).ignore(),
        weapon_columns(),
        success(()),
    ])
}

fn weapons_footer() -> Parser<()> {
    footer_with_chapter(localized("REGRAS DO JOGO", "MESTRE"))
}

/// A basic weapons page
pub fn basic_weapons_page(fallback: CategoryFallback) -> Parser<Vec<Weapon>> {
    let start = keep_right(many1(artwork()), optional_weapon_header());
    let block = then(category_title(fallback), many1(weapon_row())).map(|(category, rows)| {
        rows.into_iter()
            .map(|row| row.into_weapon(category))
            .collect::<Vec<_>>()
    });
    let ending = then(
        alternative([
            then(basic_weapons_title(), weapons_footer()).ignore(),
            weapons_footer(),
        ]),
        end(),
    );
    keep_left(keep_right(start, many1(block)), ending)
        .map(|blocks| blocks.into_iter().flatten().collect())
}

/// A rare weapons page
pub fn rare_weapons_page(fallback: CategoryFallback) -> Parser<Vec<Weapon>> {
    let start = keep_right(
        many1(artwork()),
        keep_left(rare_banner(fallback), weapon_columns()),
    );
    let rows = then(start, many1(weapon_row())).map(|(category, rows)| {
        rows.into_iter()
            .map(|row| row.into_weapon(category))
            .collect::<Vec<_>>()
    });
    keep_left(rows, then(weapons_footer(), end()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::{resolve, Cursor, Token};

    #[test]
    fn test_category_titles() {
        let p = category_title(CategoryFallback::Strict);
        let accept = |s: &str| resolve(p.parse(&Cursor::new(vec![Token::text(s, "Antonio-Bold")]))).accepted();
        assert_eq!(accept("Sword Category"), Some(WeaponCategory::Sword));
        assert_eq!(accept("Categoria de Lanças"), Some(WeaponCategory::Spear));
        assert_eq!(accept("Categorias de Armas de Fogo"), Some(WeaponCategory::Firearm));
        assert_eq!(accept("Mystery Category"), None);
        assert_eq!(accept("Sword"), None);
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let p = category_title(CategoryFallback::default());
        let cursor = Cursor::new(vec![Token::text("Mystery Category", "Antonio-Bold")]);
        assert_eq!(resolve(p.parse(&cursor)).accepted(), Some(WeaponCategory::Arcane));
    }

    #[test]
    fn test_weapon_header_shapes() {
        let page = |words: &[&str]| {
            Cursor::new(
                words
                    .iter()
                    .map(|w| Token::text(*w, "Antonio-Bold"))
                    .collect::<Vec<_>>(),
            )
        };
        let p = then(optional_weapon_header(), category_title(CategoryFallback::Strict));
        let accept = |words: &[&str]| resolve(p.parse(&page(words))).accepted().map(|(_, c)| c);

        assert_eq!(
            accept(&["BASIC WEAPONS", "WEAPON", "COST", "ACCURACY", "DAMAGE", "Bow Category"]),
            Some(WeaponCategory::Bow)
        );
        assert_eq!(
            accept(&["ARMA", "CUSTO", "PRECISÃO", "DANO", "Categoria de Adagas"]),
            Some(WeaponCategory::Dagger)
        );
        assert_eq!(accept(&["Sword Category"]), Some(WeaponCategory::Sword));
        assert_eq!(accept(&["WEAPON", "COST", "Sword Category"]), None);
    }

    #[test]
    fn test_rare_banner() {
        let p = rare_banner(CategoryFallback::Strict);
        let accept = |s: &str| resolve(p.parse(&Cursor::new(vec![Token::text(s, "Antonio-Bold")]))).accepted();
        assert_eq!(accept("SAMPLE RARE BOW WEAPONS"), Some(WeaponCategory::Bow));
        assert_eq!(accept("EXEMPLOS DE ADAGAS RARAS"), Some(WeaponCategory::Dagger));
        assert_eq!(accept("EXEMPLOS DE ARCOS RAROS"), Some(WeaponCategory::Bow));
        assert_eq!(accept("SAMPLE WEAPONS"), None);
    }
}
