//! Name matching: the three strategies and their priority order.

use cierre_core::matcher::best_match;

fn roster(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Accent/case differences are invisible to the exact strategy.
#[test]
fn exact_match_ignores_accents_and_case() {
    let cands = roster(&["María José Pérez", "Pedro Soto"]);
    assert_eq!(
        best_match("Maria Jose Perez", &cands),
        Some("María José Pérez")
    );
}

/// "J. Perez" against a roster containing only "Perez": the initial is
/// dropped at tokenization, leaving a mutual token subset.
#[test]
fn token_subset_matches_partial_names() {
    let cands = roster(&["Perez"]);
    assert_eq!(best_match("J. Perez", &cands), Some("Perez"));
}

/// Subset matching works in both directions: the activity log may carry
/// fewer or more name parts than the roster.
#[test]
fn token_subset_is_bidirectional() {
    let cands = roster(&["Maria Alejandra Perez Soto"]);
    assert_eq!(
        best_match("Maria Perez", &cands),
        Some("Maria Alejandra Perez Soto")
    );
    let cands = roster(&["Maria Perez"]);
    assert_eq!(
        best_match("Maria Alejandra Perez Soto", &cands),
        Some("Maria Perez")
    );
}

/// First qualifying candidate in input order wins subset ties.
#[test]
fn first_subset_candidate_wins() {
    let cands = roster(&["Ana Perez", "Luis Perez"]);
    assert_eq!(best_match("Perez", &cands), Some("Ana Perez"));
}

/// A near-miss spelling clears the similarity floor.
#[test]
fn similarity_catches_typos() {
    let cands = roster(&["María José Pérez"]);
    // Extra letter, no shared token subset relationship is needed:
    // normalized distance 1/16 keeps the ratio well above 0.82.
    assert_eq!(
        best_match("Maria Josee Perez", &cands),
        Some("María José Pérez")
    );
}

/// Below the floor the matcher refuses to guess.
#[test]
fn no_match_below_similarity_floor() {
    let cands = roster(&["María José Pérez", "Pedro Soto Fuentes"]);
    assert_eq!(best_match("Juan Ignacio Rojas", &cands), None);
}

/// Empty roster: nothing to match.
#[test]
fn empty_candidate_list_returns_none() {
    assert_eq!(best_match("Maria Perez", &[]), None);
}

/// Strategies run in priority order: an exact match beats an earlier
/// candidate that would only match by token subset.
#[test]
fn exact_strategy_outranks_subset() {
    let cands = roster(&["Maria Perez Soto", "María Pérez"]);
    assert_eq!(best_match("Maria Perez", &cands), Some("María Pérez"));
}
