//! Compiled token patterns, cached per thread
//!
//! Value columns (costs, page numbers) and font allow-lists are regexes, and
//! every page grammar builds the same ones again. Compiling each pattern
//! once per thread keeps grammar construction cheap for batch workers.

use hashbrown::HashMap;
use regex::Regex;
use std::cell::RefCell;

thread_local! {
    static PATTERNS: RefCell<HashMap<String, Regex>> = RefCell::new(HashMap::new());
}

/// Compiled form of `pattern`, or `None` if it is not a valid regex
///
/// `Regex` clones share the compiled program, so handing out clones is cheap.
pub fn get_or_compile(pattern: &str) -> Option<Regex> {
    PATTERNS.with(|patterns| {
        if let Some(regex) = patterns.borrow().get(pattern) {
            return Some(regex.clone());
        }
        match Regex::new(pattern) {
            Ok(regex) => {
                patterns.borrow_mut().insert(pattern.to_string(), regex.clone());
                Some(regex)
            }
            Err(_e) => {
                log_warn!("invalid token pattern {:?}: {}", pattern, _e);
                None
            }
        }
    })
}

/// Compile a list of font patterns, dropping invalid ones
pub fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().filter_map(|p| get_or_compile(p)).collect()
}

#[cfg(test)]
fn is_cached(pattern: &str) -> bool {
    PATTERNS.with(|patterns| patterns.borrow().contains_key(pattern))
}
