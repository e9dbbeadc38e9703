//! Activity classification: exact table, substring precedence, defaults,
//! and the independent minutes taxonomy.

use cierre_core::classifier::{
    classify_daily, classify_minutes, DailyCategory, MinutesCategory, CONTAINS_RULES, EXACT_RULES,
};

/// Every label in the exact table classifies to its mapped category,
/// regardless of case and surrounding whitespace.
#[test]
fn exact_table_is_case_and_whitespace_insensitive() {
    for (label, expected) in EXACT_RULES {
        let shouted = format!("  {} ", label.to_uppercase());
        assert_eq!(
            classify_daily(&shouted),
            *expected,
            "label '{label}' misclassified"
        );
    }
}

/// Labels matching neither the exact table nor any substring rule default
/// to Presente.
#[test]
fn unknown_labels_default_to_presente() {
    for label in ["reunión de equipo comercial x", "???", "", "almuerzo corto"] {
        assert_eq!(classify_daily(label), DailyCategory::Presente);
    }
}

/// Substring rules only fire after the exact table misses, and in order:
/// the specific "capacitación sin conexión" needle wins over the generic
/// capacitación entries.
#[test]
fn substring_rules_respect_precedence() {
    assert_eq!(
        classify_daily("Capacitación sin conexión jornada completa"),
        DailyCategory::CapacitacionSinConexionJornadaCompleta,
    );
    // Exact entry shadows the substring scan entirely.
    assert_eq!(
        classify_daily("Capacitación"),
        DailyCategory::Presente,
    );
    assert_eq!(
        classify_daily("vacaciones adelantadas"),
        DailyCategory::Vacaciones,
    );
    assert_eq!(
        classify_daily("descanso post turno"),
        DailyCategory::Libre,
    );
}

/// Every substring rule fires for a label embedding its needle.
#[test]
fn substring_rules_all_reachable_by_embedding() {
    for (needle, expected) in CONTAINS_RULES {
        let label = format!("zz {needle} zz");
        let got = classify_daily(&label);
        // Earlier rules may legitimately shadow later ones (e.g. "sin
        // internet" is caught by "internet" first) but the category must
        // still be the shadowing rule's category.
        let first_hit = CONTAINS_RULES
            .iter()
            .find(|(n, _)| label.contains(n))
            .map(|(_, c)| *c)
            .unwrap();
        assert_eq!(got, first_hit, "needle '{needle}' ({expected:?})");
    }
}

/// Minutes predicates respect their precedence order: "capacita" is
/// checked before "internet".
#[test]
fn minutes_precedence_capacitacion_first() {
    assert_eq!(
        classify_minutes("capacitación de internet"),
        Some(MinutesCategory::Capacitacion),
    );
}

/// Each of the five minutes buckets is reachable.
#[test]
fn minutes_buckets_reachable() {
    assert_eq!(
        classify_minutes("Capacitación Jornada Completa"),
        Some(MinutesCategory::Capacitacion),
    );
    assert_eq!(
        classify_minutes("Permiso con descuento"),
        Some(MinutesCategory::PermisoConDescuento),
    );
    assert_eq!(
        classify_minutes("Problemas técnicos (internet)"),
        Some(MinutesCategory::ProblemasInternet),
    );
    assert_eq!(
        classify_minutes("Problemas técnicos (equipo)"),
        Some(MinutesCategory::ProblemasEquipo),
    );
    assert_eq!(
        classify_minutes("Problemas técnicos (bloqueo/reseteo cuenta)"),
        Some(MinutesCategory::ProblemasEquipo),
    );
    assert_eq!(
        classify_minutes("  VIVE TU MOMENTOS "),
        Some(MinutesCategory::ViveTuMomentos),
    );
}

/// Labels matching none of the five predicates are excluded, never
/// defaulted.
#[test]
fn minutes_never_guesses() {
    for label in ["En la cola", "Vacaciones", "Festivo", "", "Licencia Médica"] {
        assert_eq!(classify_minutes(label), None, "label '{label}'");
    }
}

/// The two taxonomies are computed independently: "permiso con descuento"
/// counts as Permiso Especial Diario for the day but sums into its own
/// minutes bucket.
#[test]
fn taxonomies_are_independent() {
    assert_eq!(
        classify_daily("permiso con descuento"),
        DailyCategory::PermisoEspecialDiario,
    );
    assert_eq!(
        classify_minutes("permiso con descuento"),
        Some(MinutesCategory::PermisoConDescuento),
    );
}
