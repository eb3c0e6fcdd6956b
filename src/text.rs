//! Text normalization and numeric conversions
//!
//! Rulebook text comes in two languages and with typesetting noise: accents,
//! currency suffixes, thousands separators and soft-wrapped lines. These
//! helpers turn that into plain keys and integers.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lower-case, accent-stripped, whitespace-collapsed form of `s`
///
/// This is the key used by every alias table.
pub fn normalize_text(s: &str) -> String {
    let stripped: String = s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `"-"` is zero, anything else must be a non-negative integer
pub fn convert_dash_or_number(s: &str) -> Option<u32> {
    let s = s.trim();
    if s == "-" {
        return Some(0);
    }
    s.parse().ok()
}

/// Parse an item cost such as `"1.200 z"`, `"50z"`, `"-"` or `"50"`
///
/// The zenit suffix and thousands separators are dropped before parsing.
pub fn convert_cost(s: &str) -> Option<u32> {
    let s = s.trim();
    if s == "-" {
        return Some(0);
    }
    let amount = s
        .strip_suffix('z')
        .map(str::trim_end)
        .unwrap_or(s);
    let digits: String = amount.chars().filter(|c| !matches!(c, '.' | ',')).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Localized abbreviations of a stat, `"DEX"`/`"DES"` and `"INS"`/`"AST"`
fn stat_aliases(prefix: &str) -> Vec<String> {
    let key = normalize_text(prefix);
    let mut aliases = vec![key.clone()];
    match key.as_str() {
        "dex" => aliases.push("des".to_string()),
        "ins" => aliases.push("ast".to_string()),
        _ => {}
    }
    aliases
}

/// Parse a defense value that may be a stat die (`"DEX Die 6"`, `"dado de dex 6"`)
///
/// `prefix` names the stat the column is based on. Die-based values yield
/// the die modifier; a missing modifier counts as zero. Plain values go
/// through [`convert_dash_or_number`], so `"+1"` and `"-"` work too.
pub fn convert_stat_die(prefix: &str, s: &str) -> Option<u32> {
    let raw = s.trim();
    let normalized = normalize_text(raw);
    for alias in stat_aliases(prefix) {
        let labels = [
            format!("{} size", alias),
            format!("{} die", alias),
            format!("dado de {}", alias),
        ];
        for label in &labels {
            if let Some(rest) = normalized.strip_prefix(label.as_str()) {
                let rest = rest.trim();
                return if rest.is_empty() {
                    Some(0)
                } else {
                    rest.trim_start_matches('+').trim().parse().ok()
                };
            }
        }
    }
    convert_dash_or_number(raw)
}

/// Join description lines, repairing soft wraps
///
/// A line starting with closing punctuation attaches to the previous one
/// without a space; every other line is separated by a single space.
pub fn prettify_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        let attaches = line.starts_with(['.', '?', '!', ')', ',']);
        if !out.is_empty() && !attaches {
            out.push(' ');
        }
        out.push_str(line);
    }
    out
}
