//! Fuzzy agent-name resolution against the roster.
//!
//! Three strategies, tried in order, first hit wins:
//!   1. Exact — normalized equality (case/accent-insensitive).
//!   2. Token subset — either token set contained in the other, which covers
//!      missing middle names in both directions.
//!   3. Similarity — normalized Levenshtein ratio over the normalized
//!      strings, best candidate wins if it clears the floor.
//!
//! Deterministic for a fixed candidate order. Below the floor we return
//! `None` instead of guessing; callers degrade to absent roster metadata.

use crate::normalize::{name_tokens, normalize_name};

/// Minimum similarity ratio for a strategy-3 match. Calibrated against
/// normalized Levenshtein; scores below this are noise on short names.
pub const SIMILARITY_FLOOR: f64 = 0.82;

/// Resolve a free-text agent name to one of `candidates`, or `None`.
pub fn best_match<'a>(agent: &str, candidates: &'a [String]) -> Option<&'a str> {
    let norm_agent = normalize_name(agent);

    // Exact, first occurrence wins.
    for cand in candidates {
        if normalize_name(cand) == norm_agent {
            return Some(cand);
        }
    }

    // Token subset in either direction. Empty sets never match: an
    // initials-only name would otherwise swallow the whole roster.
    let agent_tokens = name_tokens(agent);
    if !agent_tokens.is_empty() {
        for cand in candidates {
            let cand_tokens = name_tokens(cand);
            if cand_tokens.is_empty() {
                continue;
            }
            if agent_tokens.is_subset(&cand_tokens) || cand_tokens.is_subset(&agent_tokens) {
                return Some(cand);
            }
        }
    }

    // Similarity fallback; keep the best-scoring candidate.
    let mut best: Option<(&'a str, f64)> = None;
    for cand in candidates {
        let score = strsim::normalized_levenshtein(&norm_agent, &normalize_name(cand));
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((cand, score));
        }
    }
    match best {
        Some((cand, score)) if score >= SIMILARITY_FLOOR => Some(cand),
        _ => None,
    }
}
