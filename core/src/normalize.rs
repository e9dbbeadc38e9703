//! Name normalization for roster matching.
//!
//! Activity exports and the roster spell the same person differently:
//! accents, casing, punctuation, extra middle names. Everything the matcher
//! compares goes through `normalize_name` first so those differences vanish.

use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// NFKD-decompose and drop combining marks ("Pérez" -> "Perez").
pub fn strip_accents(s: &str) -> String {
    s.nfkd().filter(|ch| !is_combining_mark(*ch)).collect()
}

/// Canonical comparison form: accent-free, lowercase, punctuation mapped to
/// spaces, whitespace collapsed. Total function; never fails.
pub fn normalize_name(s: &str) -> String {
    let lowered = strip_accents(s).to_lowercase();
    let spaced: String = lowered
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch.is_whitespace() {
                ch
            } else {
                ' '
            }
        })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Token set for subset matching. Single-character tokens (initials,
/// stray punctuation remnants) carry no signal and are dropped.
pub fn name_tokens(s: &str) -> HashSet<String> {
    normalize_name(s)
        .split_whitespace()
        .filter(|t| t.len() >= 2)
        .map(str::to_string)
        .collect()
}
