//! Bestiary pages
//!
//! A bestiary page holds one or more stat blocks between arbitrary art and
//! flavor content. Records are discovered by scanning forward for the
//! image-name-level pattern that opens every stat block, stopping at the
//! section footer.
//!
//! Optional sections (equipment, attacks, spells, other actions, special
//! rules) are detected by their heading token before their parser runs, so a
//! missing section costs nothing and never produces an error.

use super::common::{accuracy, damage, localized, sep, BODY_FONTS, ITALIC_FONTS};
use super::footer::{chapter_footer, watermark};
use crate::combinator::{
    alternative, any_parsed, end, image, keep_left, keep_right, many, many1, matches, peek,
    sequence, skip_until, string, string_with_font, string_without_font, success, text,
    text_with_font, then, when, Cursor, Outcome, Outcomes, ParseFailure, Parser, StringToken, Token,
};
use crate::model::{
    Accuracy, Affinity, Attack, Beast, BeastAttributes, DamageType, Distance, Resistances,
    SpecialRule, Spell,
};

const ICON_FONT: &str = "FabulaUltimaicons-Regular$";

/// Headings and labels that end a stat block description
const STOP_HEADERS: &[&str] = &[
    "BASIC ATTACKS",
    "ATAQUES BÁSICOS",
    "SPELLS",
    "FEITIÇOS",
    "OTHER ACTIONS",
    "OUTRAS AÇÕES",
    "SPECIAL RULES",
    "REGRAS ESPECIAIS",
    "Typical Traits:",
    "Traços típicos:",
];

// ============================================================================
// Descriptions
// ============================================================================

fn ends_description(token: &StringToken) -> bool {
    let section_icon = token.font.ends_with("FabulaUltimaicons-Regular")
        && matches!(token.text.as_str(), "C" | "M" | "R" | "S");
    STOP_HEADERS.contains(&token.text.as_str())
        || token.text.starts_with("Opportunity:")
        || token.text.starts_with("Oportunidade:")
        || section_icon
}

/// Body lines of a stat block, which may include inline icons
fn beast_description() -> Parser<String> {
    let fonts: Vec<&str> = BODY_FONTS.iter().copied().chain([ICON_FONT]).collect();
    super::common::description_in(&fonts, "beast description", ends_description)
}

// ============================================================================
// Attributes
// ============================================================================

/// `DEX d8` style attribute die
fn attribute_die(codes: &[&str]) -> Parser<u8> {
    let pattern = format!(r"^({}) d(6|8|10|12)$", codes.join("|"));
    matches(&pattern, "attribute die").map_opt("attribute die", |s| {
        s.rsplit('d').next().and_then(|n| n.parse().ok())
    })
}

/// Integer after the label of a `LABEL N` token
fn labelled_number(pattern: &str, what: &str) -> Parser<u32> {
    matches(pattern, what).map_opt(what.to_string(), |s| {
        s.rsplit(' ')
            .next()
            .and_then(|n| n.trim_start_matches('+').parse().ok())
    })
}

fn bare_number(what: &str) -> Parser<u32> {
    matches(r"^[0-9]+$", what).map_opt(what.to_string(), |s| s.parse().ok())
}

/// The fixed attribute block
pub fn attributes() -> Parser<BeastAttributes> {
    sequence((
        attribute_die(&["DEX", "DES"]),
        attribute_die(&["INS", "AST"]),
        attribute_die(&["MIG", "VIG"]),
        attribute_die(&["WLP", "VON"]),
        keep_right(localized("HP", "PV"), bare_number("HP")),
        keep_right(sep(), bare_number("crisis")),
        keep_right(localized("MP", "PM"), bare_number("MP")),
        labelled_number(r"^(Init\.|Inic\.) [0-9]+$", "initiative"),
        labelled_number(r"^DEF \+?[0-9]+$", "defense"),
        labelled_number(r"^(M\.DEF|DEF\.M) \+?[0-9]+$", "magic defense"),
    ))
    .map(
        |(dex, ins, mig, wlp, max_hp, crisis, max_mp, init, def, mdef)| BeastAttributes {
            dex,
            ins,
            mig,
            wlp,
            max_hp,
            crisis,
            max_mp,
            init,
            def,
            mdef,
        },
    )
}

// ============================================================================
// Resistances
// ============================================================================

fn text_at(cursor: &Cursor) -> Option<&str> {
    cursor.peek().and_then(Token::as_text).map(|t| t.text.as_str())
}

/// Affinity for one damage type
///
/// Expects the type's icon. A code right after it gives the affinity; a
/// repeated icon followed by a code is accepted too. Without a code the
/// affinity is normal and only the icon is consumed.
pub fn resistance(damage_type: DamageType) -> Parser<Affinity> {
    Parser::new(move |cursor| {
        let is_icon = |at: &Cursor| text_at(at).is_some_and(|t| damage_type.is_icon(t));
        if !is_icon(cursor) {
            return vec![Outcome::Failed(ParseFailure::at(
                format!("{} icon", damage_type),
                cursor,
            ))];
        }
        let after_icon = cursor.advance();
        if let Some(affinity) = text_at(&after_icon).and_then(Affinity::from_code) {
            return vec![Outcome::Parsed {
                value: affinity,
                rest: after_icon.advance(),
            }];
        }
        if is_icon(&after_icon) {
            let after_second = after_icon.advance();
            if let Some(affinity) = text_at(&after_second).and_then(Affinity::from_code) {
                return vec![Outcome::Parsed {
                    value: affinity,
                    rest: after_second.advance(),
                }];
            }
        }
        vec![Outcome::Parsed {
            value: Affinity::Normal,
            rest: after_icon,
        }]
    })
}

/// All nine affinities, in [`DamageType::ALL`] order
pub fn resistances() -> Parser<Resistances> {
    DamageType::ALL
        .iter()
        .fold(success(Resistances::default()), |block, &damage_type| {
            then(block, resistance(damage_type)).map(move |(mut resistances, affinity)| {
                resistances.set(damage_type, affinity);
                resistances
            })
        })
}

// ============================================================================
// Attacks
// ============================================================================

/// A damage-type word after the damage, if there is one
fn maybe_damage_type() -> Parser<Option<DamageType>> {
    Parser::new(|cursor| {
        let found = text_at(cursor).and_then(DamageType::from_word);
        vec![Outcome::Parsed {
            value: found,
            rest: if found.is_some() {
                cursor.advance()
            } else {
                cursor.clone()
            },
        }]
    })
}

/// Bracketed damage and its type; attacks without one deal no flat damage
fn maybe_damage() -> Parser<(u32, Option<DamageType>)> {
    when(
        alternative([text("【"), text("(")]),
        then(damage(), maybe_damage_type()),
        (0, None),
    )
}

fn attack_range() -> Parser<Distance> {
    alternative([
        text_with_font("$", &["Evilz$"]).map(|_| Distance::Melee),
        text_with_font("M", &[ICON_FONT]).map(|_| Distance::Melee),
        many1(text_with_font("a", &["fabulaultima$"])).map(|_| Distance::Ranged),
        many1(text_with_font("R", &[ICON_FONT])).map(|_| Distance::Ranged),
    ])
}

/// One basic attack
pub fn attack() -> Parser<Attack> {
    sequence((
        attack_range(),
        string(),
        keep_right(sep(), accuracy()),
        keep_right(sep(), maybe_damage()),
        beast_description(),
    ))
    .map(
        |(range, name, accuracy, (damage, damage_type), description)| Attack {
            range,
            name,
            accuracy,
            damage,
            damage_type,
            description,
        },
    )
}

// ============================================================================
// Spells
// ============================================================================

/// Canonical key for a spell duration
pub fn canonical_duration(raw: &str) -> String {
    match raw {
        "Until the start of your next turn" | "Até o início do seu próximo turno" => {
            "nextTurn".to_string()
        }
        "Instantaneous" | "Instantânea" => "instant".to_string(),
        "Scene" | "Cena" => "scene".to_string(),
        other => other.to_lowercase(),
    }
}

/// MP cost with its three-character unit suffix (` MP` / ` PM`) dropped
fn strip_mp_unit(raw: &str) -> String {
    let keep = raw.chars().count().saturating_sub(3);
    raw.chars().take(keep).collect::<String>().trim().to_string()
}

fn spell_accuracy_icon() -> Parser<String> {
    alternative([
        text_with_font("r", &["Heydings-Icons$"]),
        text_with_font("O", &["Type3$"]),
    ])
}

/// Accuracy, present only when introduced by its icon
fn maybe_spell_accuracy() -> Parser<Option<Accuracy>> {
    when(
        spell_accuracy_icon(),
        keep_right(many1(spell_accuracy_icon()), keep_right(sep(), accuracy())).map(Some),
        None,
    )
}

fn opportunity_label() -> Parser<String> {
    localized("Opportunity:", "Oportunidade:")
}

fn maybe_opportunity() -> Parser<Option<String>> {
    when(
        opportunity_label(),
        keep_right(opportunity_label(), beast_description()).map(Some),
        None,
    )
}

/// One spell
pub fn spell() -> Parser<Spell> {
    let icon = alternative([
        text_with_font("h", &["Evilz$"]),
        text_with_font("C", &[ICON_FONT]),
    ]);
    sequence((
        keep_right(icon, string()),
        maybe_spell_accuracy(),
        keep_right(sep(), string().map(|s| strip_mp_unit(&s))),
        keep_right(sep(), string()),
        keep_right(sep(), keep_left(string(), text(".")).map(|s| canonical_duration(&s))),
        beast_description(),
        maybe_opportunity(),
    ))
    .map(
        |(name, accuracy, mp, target, duration, description, opportunity)| Spell {
            name,
            accuracy,
            mp,
            target,
            duration,
            description,
            opportunity,
        },
    )
}

// ============================================================================
// Rules and sections
// ============================================================================

/// Name, optional separator, description
pub fn special_rule() -> Parser<SpecialRule> {
    let description = Parser::new({
        let with_sep = keep_right(sep(), beast_description());
        let bare = beast_description();
        move |cursor: &Cursor| {
            let sep_next = cursor
                .peek()
                .and_then(Token::as_text)
                .is_some_and(|t| t.text == "w" && t.font.ends_with("Wingdings-Regular"));
            if sep_next {
                with_sep.parse(cursor)
            } else {
                bare.parse(cursor)
            }
        }
    });
    then(string(), description).map(|(name, description)| SpecialRule { name, description })
}

/// A section introduced by one of its bilingual headings
fn section<T>(english: &str, portuguese: &str, entries: Parser<Vec<T>>) -> Parser<Vec<T>>
where
    T: Clone + Send + Sync + 'static,
{
    when(
        localized(english, portuguese),
        keep_right(localized(english, portuguese), entries),
        Vec::new(),
    )
}

/// Equipment list, `Equipment: sword, shield.`
fn maybe_equipment() -> Parser<Option<Vec<String>>> {
    let list = string().map(|s| {
        let body = s.strip_suffix('.').unwrap_or(s.as_str());
        body.split(", ").map(str::to_string).collect::<Vec<_>>()
    });
    when(
        localized("Equipment:", "Equipamento:"),
        keep_right(localized("Equipment:", "Equipamento:"), list).map(Some),
        None,
    )
}

fn other_actions() -> Parser<Vec<SpecialRule>> {
    let icon = alternative([
        text_with_font("S", &["WebSymbols-Regular$"]),
        text_with_font("S", &[ICON_FONT]),
    ]);
    section(
        "OTHER ACTIONS",
        "OUTRAS AÇÕES",
        many1(keep_right(icon, special_rule())),
    )
}

/// Level marker, `Lv. 5` / `Nvl. 5`
fn level() -> Parser<u32> {
    matches(r"^(Lv|Nvl)\. [0-9]+", "level").map_opt("level", |s| {
        s.split(' ').nth(1).and_then(|n| n.parse().ok())
    })
}

/// Image, name and level: the opening of every stat block
pub fn beast_start() -> Parser<()> {
    sequence((image(), string(), level())).ignore()
}

/// A full stat block
pub fn beast() -> Parser<Beast> {
    let header = sequence((
        image(),
        string(),
        level(),
        keep_right(sep(), string()),
        beast_description(),
        keep_right(localized("Typical Traits:", "Traços típicos:"), string()),
    ));
    let sections = sequence((
        maybe_equipment(),
        section("BASIC ATTACKS", "ATAQUES BÁSICOS", many1(attack())),
        section("SPELLS", "FEITIÇOS", many1(spell())),
        other_actions(),
        section("SPECIAL RULES", "REGRAS ESPECIAIS", many1(special_rule())),
    ));
    sequence((header, then(attributes(), resistances()), sections)).map(
        |(
            (image, name, level, kind, description, traits),
            (attributes, resistances),
            (equipment, attacks, spells, other_actions, special_rules),
        )| Beast {
            image,
            name,
            level,
            kind,
            description,
            traits,
            attributes,
            resistances,
            equipment,
            attacks,
            spells,
            other_actions,
            special_rules,
        },
    )
}

// ============================================================================
// Footers
// ============================================================================

/// Aside or credit block some pages print above the watermark
fn legacy_aside() -> Parser<()> {
    let italic = || string_with_font(ITALIC_FONTS);
    let signed = || string_with_font(&["Antonio-Bold$"]);
    let plate = sequence((
        many1(string_without_font(&["Antonio-Bold$"])),
        signed(),
        image(),
        many(string()),
        image(),
    ))
    .ignore();
    let quoted = sequence((
        italic(),
        italic(),
        alternative([plate, success(())]),
    ))
    .ignore();
    let boxed = sequence((
        many1(matches(r"^.*[^.]$", "aside")),
        matches(r"^.*\.$", "aside"),
        signed(),
        image(),
        many(string()),
        image(),
    ))
    .ignore();
    alternative([quoted, boxed, string_with_font(&["CreditValley$"]).ignore()])
}

/// Footer of a bestiary page, ending the page
pub fn bestiary_footer() -> Parser<()> {
    let chapter = then(
        chapter_footer(localized("BESTIARY", "BESTIÁRIO")),
        end(),
    )
    .ignore();
    let legacy = sequence((
        alternative([legacy_aside(), success(())]),
        watermark(),
        end(),
    ))
    .ignore();
    alternative([chapter, legacy])
}

// ============================================================================
// Record discovery
// ============================================================================

/// Offset of the next record start at or after `cursor`
///
/// Offsets are tried in order; at each, `footer` is tested before `start`.
/// A footer match ends the scan with no start, so a start printed after
/// the footer is never selected.
pub fn scan_for_start<F: 'static, S: 'static>(
    cursor: &Cursor,
    footer: &Parser<F>,
    start: &Parser<S>,
) -> Option<Cursor> {
    let mut at = cursor.clone();
    while !at.at_end() {
        if any_parsed(&footer.parse(&at)) {
            return None;
        }
        if any_parsed(&start.parse(&at)) {
            return Some(at);
        }
        at = at.advance();
    }
    None
}

/// One or more stat blocks
///
/// Every distinct parse of a record continues the scan as its own branch,
/// so an under-constrained record shows up as an ambiguous page rather than
/// being silently narrowed to one reading.
pub fn many_beasts() -> Parser<Vec<Beast>> {
    many_records(beast(), beast_start(), bestiary_footer())
}

fn many_records<T, S, F>(record: Parser<T>, start: Parser<S>, footer: Parser<F>) -> Parser<Vec<T>>
where
    T: Clone + 'static,
    S: 'static,
    F: 'static,
{
    Parser::new(move |cursor| {
        let mut finished: Vec<(Vec<T>, Cursor)> = Vec::new();
        let mut failures = Vec::new();
        let mut pending = vec![(Vec::new(), cursor.clone())];
        while let Some((records, at)) = pending.pop() {
            let Some(found) = scan_for_start(&at, &footer, &start) else {
                finished.push((records, at));
                continue;
            };
            log_debug!("record start at token {}", found.offset());
            let mut advanced = false;
            for outcome in record.parse(&found) {
                match outcome {
                    Outcome::Parsed { value, rest } if rest.offset() > at.offset() => {
                        let mut next = records.clone();
                        next.push(value);
                        pending.push((next, rest));
                        advanced = true;
                    }
                    Outcome::Parsed { .. } => {}
                    Outcome::Failed(failure) => failures.push(failure),
                }
            }
            if !advanced {
                log_warn!(
                    "record at token {} did not parse, ending the list after {}",
                    found.offset(),
                    records.len()
                );
                finished.push((records, at));
            }
        }
        let mut outcomes: Outcomes<Vec<T>> = finished
            .into_iter()
            .filter(|(records, _)| !records.is_empty())
            .map(|(value, rest)| Outcome::Parsed { value, rest })
            .collect();
        if outcomes.is_empty() {
            outcomes.push(Outcome::Failed(ParseFailure::at("beast list", cursor)));
        }
        outcomes.extend(failures.into_iter().map(Outcome::Failed));
        outcomes
    })
}

/// A whole bestiary page
pub fn bestiary_page() -> Parser<Vec<Beast>> {
    let start = skip_until(peek(beast_start(), "beast"), "bestiary start");
    let ending = skip_until(bestiary_footer(), "bestiary footer");
    keep_left(keep_right(start, many_beasts()), ending)
}
