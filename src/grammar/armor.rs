//! Armor pages

use super::common::{
    artwork, cost, description, initiative, leading_images, localized, martial, name, one_of,
    optional_star, stat_die,
};
use super::footer::footer_with_chapter;
use crate::combinator::{alternative, end, keep_left, keep_right, many1, sequence, text, then, Parser};
use crate::model::Armor;

/// One armor row
pub fn armor_row() -> Parser<Armor> {
    let identity = sequence((artwork(), name(), optional_star(), martial(), cost()));
    let stats = sequence((
        stat_die("DEX", "defense"),
        stat_die("INS", "magic defense"),
        initiative(),
        description(),
    ));
    then(identity, stats).map(
        |((image, name, _, martial, cost), (def, mdef, init, description))| Armor {
            image,
            name,
            martial,
            cost,
            def,
            mdef,
            init,
            description,
        },
    )
}

fn armor_title() -> Parser<()> {
    alternative([
        localized("BASIC ARMORS", "ARMADURAS BÁSICAS").ignore(),
        then(text("ARMADURAS E ESCUDOS BÁSICOS"), text("ARMADURAS BÁSICAS")).ignore(),
        localized("SAMPLE RARE ARMORS", "EXEMPLOS DE ARMADURAS RARAS").ignore(),
    ])
}

/// `ARMOR / COST / DEF / M.DEF / INIT`
fn armor_columns() -> Parser<()> {
    sequence((
        one_of(&["ARMOR", "ARMADURA", "ITEM"]),
        localized("COST", "CUSTO"),
        localized("DEF", "DEFESA"),
        one_of(&["M.DEF", "DEF.M", "MDEF"]),
        one_of(&["INIT", "INIC.", "INIC", "INICIATIVA"]),
    ))
    .ignore()
}

fn armor_footer() -> Parser<()> {
    footer_with_chapter(localized("GAME MASTER", "MESTRE"))
}

/// A basic or rare armor page
pub fn armor_page() -> Parser<Vec<Armor>> {
    let header = alternative([then(armor_title(), armor_columns()).ignore(), armor_columns()]);
    let start = keep_right(leading_images(), header);
    let ending = then(
        alternative([
            then(localized("BASIC ARMORS", "ARMADURAS BÁSICAS"), armor_footer()).ignore(),
            armor_footer(),
        ]),
        end(),
    );
    keep_left(keep_right(start, many1(armor_row())), ending)
}
