//! Consumables page
//!
//! Items are grouped under short sub-headings. Each item is artwork, a name
//! that may wrap over several lines, its IP cost and an effect description.

use super::common::{artwork, description, localized, number};
use super::footer::plain_footer;
use crate::combinator::{
    end, keep_left, keep_right, many1, matches, sequence, skip_until, text, text_token, then,
    Parser,
};
use crate::model::{Consumable, ConsumableGroup};

/// Item name lines; a line of digits is the IP cost and ends the name
fn consumable_name() -> Parser<String> {
    many1(text_token("consumable name", |t| {
        (!t.text.chars().all(|c| c.is_ascii_digit())).then(|| t.text.clone())
    }))
    .map(|lines| lines.join(" "))
}

/// One consumable
pub fn consumable() -> Parser<Consumable> {
    sequence((artwork(), consumable_name(), number("IP cost"), description())).map(
        |(image, name, ip_cost, description)| Consumable {
            image,
            name,
            ip_cost,
            description,
        },
    )
}

/// Group heading: a line without sentence punctuation
fn heading() -> Parser<String> {
    matches(r"^[^.?!]*$", "group heading")
}

/// `ITEM / IP COST / EFFECT` column header, found anywhere after the intro
fn column_header() -> Parser<()> {
    let columns = sequence((
        text("ITEM"),
        localized("IP COST", "CUSTO DE PI"),
        localized("EFFECT", "EFEITO"),
    ))
    .ignore();
    skip_until(columns, "consumables header")
}

/// A whole consumables page
pub fn consumables_page() -> Parser<Vec<ConsumableGroup>> {
    let start = keep_right(many1(artwork()), column_header());
    let group = then(heading(), many1(consumable()))
        .map(|(heading, items)| ConsumableGroup { heading, items });
    keep_left(keep_right(start, many1(group)), then(plain_footer(), end()))
}
