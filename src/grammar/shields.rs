//! Shield pages
//!
//! Shields share the armor columns, but their defense values are flat
//! bonuses rather than attribute dice. A shield page may end with two
//! italic flavor lines above the footer.

use super::common::{
    artwork, cost, dash_or_number, description, initiative, leading_images, localized, martial,
    name, one_of, optional_star, ITALIC_FONTS,
};
use super::footer::footer_with_chapter;
use crate::combinator::{
    alternative, end, keep_left, keep_right, many1, sequence, string_with_font, success, text,
    then, Parser,
};
use crate::model::Shield;

/// One shield row
pub fn shield_row() -> Parser<Shield> {
    let identity = sequence((artwork(), name(), optional_star(), martial(), cost()));
    let stats = sequence((
        dash_or_number("defense"),
        dash_or_number("magic defense"),
        initiative(),
        description(),
    ));
    then(identity, stats).map(
        |((image, name, _, martial, cost), (def, mdef, init, description))| Shield {
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

fn shield_title() -> Parser<()> {
    alternative([
        localized("BASIC SHIELDS", "ESCUDOS BÁSICOS").ignore(),
        then(text("ARMADURAS E ESCUDOS BÁSICOS"), text("ESCUDOS BÁSICOS")).ignore(),
        localized("SAMPLE RARE SHIELDS", "EXEMPLOS DE ESCUDOS RAROS").ignore(),
    ])
}

/// `SHIELD / COST / DEF / M.DEF / INIT`
fn shield_columns() -> Parser<()> {
    sequence((
        one_of(&["SHIELD", "ESCUDO", "ITEM"]),
        localized("COST", "CUSTO"),
        localized("DEF", "DEFESA"),
        one_of(&["M.DEF", "DEF.M", "MDEF"]),
        one_of(&["INIT", "INIC.", "INIC", "INICIATIVA"]),
    ))
    .ignore()
}

/// Two italic lines of flavor text, or nothing
fn flavor() -> Parser<()> {
    alternative([
        then(string_with_font(ITALIC_FONTS), string_with_font(ITALIC_FONTS)).ignore(),
        success(()),
    ])
}

fn shield_footer() -> Parser<()> {
    keep_right(flavor(), footer_with_chapter(localized("GAME MASTER", "MESTRE")))
}

/// A basic or rare shield page
pub fn shield_page() -> Parser<Vec<Shield>> {
    let header = alternative([then(shield_title(), shield_columns()).ignore(), shield_columns()]);
    let start = keep_right(leading_images(), header);
    let ending = then(
        alternative([
            then(localized("BASIC SHIELDS", "ESCUDOS BÁSICOS"), shield_footer()).ignore(),
            shield_footer(),
        ]),
        end(),
    );
    keep_left(keep_right(start, many1(shield_row())), ending)
}
