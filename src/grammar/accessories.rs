//! Accessory pages
//!
//! Accessory pages open with a variable amount of flavor text, so the start
//! boundary scans forward to the first column header.

use super::common::{artwork, cost, description, localized, name, one_of, optional_star};
use super::footer::{chapter_footer, plain_footer};
use crate::combinator::{
    alternative, end, image, keep_left, keep_right, many1, sequence, skip_until, then, Parser,
};
use crate::model::Accessory;

/// One accessory row
pub fn accessory_row() -> Parser<Accessory> {
    sequence((artwork(), name(), optional_star(), cost(), description())).map(
        |(image, name, _, cost, description)| Accessory {
            image,
            name,
            cost,
            description,
        },
    )
}

fn accessory_title() -> Parser<String> {
    one_of(&["ACCESSORIES", "ACESSÓRIOS", "SAMPLE ACCESSORIES", "EXEMPLOS DE ACESSÓRIOS"])
}

/// `ACCESSORY / COST [/ EFFECT]`
fn accessory_columns() -> Parser<()> {
    let name_and_cost = then(localized("ACCESSORY", "ACESSÓRIO"), localized("COST", "CUSTO"));
    alternative([
        then(name_and_cost.clone(), localized("EFFECT", "EFEITO")).ignore(),
        name_and_cost.ignore(),
    ])
}

fn accessory_footer() -> Parser<()> {
    let chapter = chapter_footer(localized("REGRAS DO JOGO", "MESTRE"));
    alternative([plain_footer(), then(image(), chapter.clone()).ignore(), chapter])
}

/// An accessories page
pub fn accessories_page() -> Parser<Vec<Accessory>> {
    let header = alternative([
        then(accessory_title(), accessory_columns()).ignore(),
        accessory_columns(),
    ]);
    let start = skip_until(header, "accessories header");
    keep_left(
        keep_right(start, many1(accessory_row())),
        then(accessory_footer(), end()),
    )
}
