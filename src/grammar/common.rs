//! Field parsers shared by the equipment grammars
//!
//! Table rows in every equipment chapter share the same column vocabulary:
//! costs, accuracy checks, damage, the martial glyph and a free-text
//! description. The bestiary reuses the accuracy and separator parsers.

use crate::combinator::{
    alternative, image, many1, matches, regex_cache, sequence, string, success, text,
    text_token, text_with_font, Cursor, Image, Outcome, ParseFailure, Parser, StringToken, Token,
};
use crate::model::{Accuracy, DamageType, Distance, Handed, Stat};
use crate::text::{convert_cost, convert_dash_or_number, convert_stat_die, prettify_lines};
use regex::Regex;

/// Fonts body text is set in
pub const BODY_FONTS: &[&str] = &[
    "PTSans-Narrow$",
    "PTSans-NarrowBold$",
    "Heydings-Icons$",
    "KozMinPro-Regular$",
    "Type3$",
];

/// Italic font of flavor lines and asides
pub const ITALIC_FONTS: &[&str] = &["MonotypeCorsiva$"];

/// Section titles that can follow a description in body font
const DESCRIPTION_STOP_PHRASES: &[&str] = &[
    "BASIC WEAPONS",
    "ARMAS BÁSICAS",
    "BASIC ARMORS",
    "ARMADURAS BÁSICAS",
    "BASIC SHIELDS",
    "ESCUDOS BÁSICOS",
];

// ============================================================================
// Glyphs
// ============================================================================

/// Column separator glyph
pub fn sep() -> Parser<String> {
    text_with_font("w", &["Wingdings-Regular$"])
}

/// The martial-item glyph, or nothing
pub fn martial() -> Parser<bool> {
    alternative([
        text_token("martial glyph", |t| {
            (t.text == "E" && t.font.contains("BasicShapes1")).then_some(true)
        }),
        success(false),
    ])
}

/// The rarity star, or nothing
pub fn optional_star() -> Parser<()> {
    alternative([text("★").ignore(), success(())])
}

// ============================================================================
// Numbers
// ============================================================================

/// Item cost such as `1.200 z`, `50z`, `300` or `-`
pub fn cost() -> Parser<u32> {
    matches(r"^([0-9.,]+ ?z|[0-9.,]+|-)$", "cost").map_opt("cost", |s| convert_cost(&s))
}

/// `-` or a non-negative integer
pub fn dash_or_number(what: &str) -> Parser<u32> {
    matches(r"^(-|\+?[0-9]+)$", what).map_opt(what, |s| convert_dash_or_number(&s))
}

/// A defense value that may be based on `stat`'s die
pub fn stat_die(stat: &'static str, what: &str) -> Parser<u32> {
    string().map_opt(what, move |s| convert_stat_die(stat, &s))
}

/// Initiative column, `-` or a penalty printed as `-1`
pub fn initiative() -> Parser<u32> {
    matches(r"^(-|[-−]?[0-9]+)$", "initiative").map_opt("initiative", |s| {
        if s == "-" {
            Some(0)
        } else {
            s.trim_start_matches(['-', '−']).parse().ok()
        }
    })
}

/// A bare integer
pub fn number(what: &str) -> Parser<u32> {
    matches(r"^[0-9]+$", what).map_opt(what, |s| s.parse().ok())
}

// ============================================================================
// Checks
// ============================================================================

/// `DEX + MIG` style attribute pair
fn stat_pair() -> Parser<(Stat, Stat)> {
    text_token("attribute pair", |t| {
        let (primary, secondary) = t.text.split_once('+')?;
        Some((Stat::from_code(primary.trim())?, Stat::from_code(secondary.trim())?))
    })
}

/// `【DEX + MIG】` followed by an optional `+N` bonus
pub fn accuracy() -> Parser<Accuracy> {
    let bonus = alternative([
        matches(r"^\+ ?[0-9]+$", "accuracy bonus")
            .map_opt("accuracy bonus", |s| s.trim_start_matches('+').trim().parse().ok()),
        success(0u32),
    ]);
    sequence((text("【"), stat_pair(), text("】"), bonus)).map(
        |(_, (primary, secondary), _, bonus)| Accuracy {
            primary,
            secondary,
            bonus,
        },
    )
}

/// `【HR + 10】` or `(HR + 10)`, yielding the flat damage
pub fn damage() -> Parser<u32> {
    let value = matches(r"^(HR|RA) \+ [0-9]+$", "damage").map_opt("damage", |s| {
        s.rsplit(' ').next().and_then(|n| n.parse().ok())
    });
    sequence((
        alternative([text("【"), text("(")]),
        value,
        alternative([text("】"), text(")")]),
    ))
    .map(|(_, damage, _)| damage)
}

/// A damage-type word
pub fn damage_type() -> Parser<DamageType> {
    string().map_opt("damage type", |s| DamageType::from_word(&s))
}

/// One- or two-handed
pub fn hands() -> Parser<Handed> {
    string().map_opt("hands", |s| Handed::from_word(&s))
}

/// Melee or ranged
pub fn distance() -> Parser<Distance> {
    string().map_opt("melee or ranged", |s| Distance::from_word(&s))
}

// ============================================================================
// Text
// ============================================================================

/// Item name: a single text token
pub fn name() -> Parser<String> {
    string()
}

/// Item artwork
pub fn artwork() -> Parser<Image> {
    image()
}

/// Consecutive body lines, joined with [`prettify_lines`]
///
/// Stops at the first token not set in one of `fonts`, or for which `stop`
/// holds. At least one line is required.
pub fn description_in(
    fonts: &[&str],
    what: &str,
    stop: impl Fn(&StringToken) -> bool + Send + Sync + 'static,
) -> Parser<String> {
    let fonts: Vec<Regex> = regex_cache::compile_all(fonts);
    let what = what.to_string();
    Parser::new(move |cursor: &Cursor| {
        let mut lines = Vec::new();
        let mut at = cursor.clone();
        while let Some(token) = at.peek().and_then(Token::as_text) {
            if !fonts.iter().any(|r| r.is_match(&token.font)) || stop(token) {
                break;
            }
            lines.push(token.text.clone());
            at = at.advance();
        }
        if lines.is_empty() {
            return vec![Outcome::Failed(ParseFailure::at(what.clone(), cursor))];
        }
        vec![Outcome::Parsed {
            value: prettify_lines(&lines),
            rest: at,
        }]
    })
}

/// Item description in body fonts
pub fn description() -> Parser<String> {
    description_in(BODY_FONTS, "description", |t| {
        DESCRIPTION_STOP_PHRASES.contains(&t.text.as_str())
    })
}

/// Either of two localized spellings of a literal
pub fn localized(english: &str, portuguese: &str) -> Parser<String> {
    alternative([text(english), text(portuguese)])
}

/// Any of several spellings of a literal
pub fn one_of(literals: &[&str]) -> Parser<String> {
    alternative(literals.iter().map(|literal| text(literal)).collect::<Vec<_>>())
}

/// One or more page images before the section header
pub fn leading_images() -> Parser<Vec<Image>> {
    many1(image())
}
