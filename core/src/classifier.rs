//! Rule-based activity classification.
//!
//! Two independent taxonomies over the same free-text activity labels:
//!   - `DailyCategory` — 13 mutually exclusive statuses; every label lands in
//!     exactly one, unknown labels default to `Presente`.
//!   - `MinutesCategory` — 5 buckets used only for minute sums; labels that
//!     match none of the keyword predicates are excluded, not defaulted.
//!
//! The rule tables are process-wide constants. Precedence is ordered
//! iteration with early exit: the exact table is consulted before the
//! substring rules, and within each table earlier entries shadow later ones
//! ("capacitación sin conexión" must fire before anything generic about
//! capacitación would).

use serde::{Deserialize, Serialize};

/// Dominant daily status. Variant order is the fixed output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DailyCategory {
    Ausencia,
    CapacitacionJornadaCompleta,
    CapacitacionSinConexionJornadaCompleta,
    CorteDeLuzJornadaCompleta,
    Festivo,
    Libre,
    LicenciaMedica,
    PermisoEspecialDiario,
    Presente,
    SinInternetJornadaCompleta,
    SinEquiposJornadaCompleta,
    Vacaciones,
    Desvinculacion,
}

impl DailyCategory {
    /// All categories in output column order.
    pub const ALL: [DailyCategory; 13] = [
        DailyCategory::Ausencia,
        DailyCategory::CapacitacionJornadaCompleta,
        DailyCategory::CapacitacionSinConexionJornadaCompleta,
        DailyCategory::CorteDeLuzJornadaCompleta,
        DailyCategory::Festivo,
        DailyCategory::Libre,
        DailyCategory::LicenciaMedica,
        DailyCategory::PermisoEspecialDiario,
        DailyCategory::Presente,
        DailyCategory::SinInternetJornadaCompleta,
        DailyCategory::SinEquiposJornadaCompleta,
        DailyCategory::Vacaciones,
        DailyCategory::Desvinculacion,
    ];

    /// Display name used for workbook column headers.
    pub fn label(self) -> &'static str {
        match self {
            DailyCategory::Ausencia => "Ausencia",
            DailyCategory::CapacitacionJornadaCompleta => "Capacitación Jornada Completa",
            DailyCategory::CapacitacionSinConexionJornadaCompleta => {
                "Capacitación sin Conexión Jornada Completa"
            }
            DailyCategory::CorteDeLuzJornadaCompleta => "Corte de Luz Jornada Completa",
            DailyCategory::Festivo => "Festivo",
            DailyCategory::Libre => "Libre",
            DailyCategory::LicenciaMedica => "Licencia Médica",
            DailyCategory::PermisoEspecialDiario => "Permiso Especial Diario",
            DailyCategory::Presente => "Presente",
            DailyCategory::SinInternetJornadaCompleta => "Sin Internet Jornada Completa",
            DailyCategory::SinEquiposJornadaCompleta => "Sin Equipos Jornada Completa",
            DailyCategory::Vacaciones => "Vacaciones",
            DailyCategory::Desvinculacion => "Desvinculación",
        }
    }

    /// Position within [`DailyCategory::ALL`]; used to index pivot columns.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

/// Minutes-sum bucket. Variant order is the fixed output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinutesCategory {
    Capacitacion,
    PermisoConDescuento,
    ProblemasEquipo,
    ProblemasInternet,
    ViveTuMomentos,
}

impl MinutesCategory {
    pub const ALL: [MinutesCategory; 5] = [
        MinutesCategory::Capacitacion,
        MinutesCategory::PermisoConDescuento,
        MinutesCategory::ProblemasEquipo,
        MinutesCategory::ProblemasInternet,
        MinutesCategory::ViveTuMomentos,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MinutesCategory::Capacitacion => "Capacitación",
            MinutesCategory::PermisoConDescuento => "Permiso con Descuento",
            MinutesCategory::ProblemasEquipo => "Problemas Equipo",
            MinutesCategory::ProblemasInternet => "Problemas Internet",
            MinutesCategory::ViveTuMomentos => "Vive tu momentos",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

/// Unknown labels fall back to this.
pub const DEFAULT_CATEGORY: DailyCategory = DailyCategory::Presente;

/// Exact-match table: known label (already trimmed + lowercased) -> category.
pub const EXACT_RULES: &[(&str, DailyCategory)] = &[
    ("en la cola", DailyCategory::Presente),
    ("descanso 15 min", DailyCategory::Presente),
    ("tiempo libre", DailyCategory::Libre),
    ("festivo", DailyCategory::Festivo),
    ("no se presenta", DailyCategory::Ausencia),
    ("dia libre", DailyCategory::Libre),
    ("descanso vf", DailyCategory::Libre),
    ("comida full", DailyCategory::Presente),
    (
        "problemas técnicos (internet)",
        DailyCategory::SinInternetJornadaCompleta,
    ),
    ("vacaciones", DailyCategory::Vacaciones),
    (
        "problemas técnicos (equipo)",
        DailyCategory::SinEquiposJornadaCompleta,
    ),
    (
        "problemas técnicos (corte de luz)",
        DailyCategory::CorteDeLuzJornadaCompleta,
    ),
    ("licencia médica", DailyCategory::LicenciaMedica),
    ("descanso vf banco", DailyCategory::Libre),
    (
        "permiso especial por horas",
        DailyCategory::PermisoEspecialDiario,
    ),
    (
        "permiso con devolución de horas",
        DailyCategory::PermisoEspecialDiario,
    ),
    ("devolución horas", DailyCategory::PermisoEspecialDiario),
    ("vive tu momentos", DailyCategory::Libre),
    ("desvinculación", DailyCategory::Desvinculacion),
    (
        "capacitación jornada completa",
        DailyCategory::CapacitacionJornadaCompleta,
    ),
    ("capacitación", DailyCategory::Presente),
    ("permiso con descuento", DailyCategory::PermisoEspecialDiario),
    ("vacaciones en día libre", DailyCategory::Vacaciones),
    (
        "licencia médica en día libre",
        DailyCategory::LicenciaMedica,
    ),
    (
        "problemas técnicos (bloqueo/reseteo cuenta)",
        DailyCategory::SinEquiposJornadaCompleta,
    ),
    (
        "permiso especial diario",
        DailyCategory::PermisoEspecialDiario,
    ),
    ("fuero maternal", DailyCategory::PermisoEspecialDiario),
];

/// Ordered substring rules, consulted only after the exact table misses.
/// More specific needles come first.
pub const CONTAINS_RULES: &[(&str, DailyCategory)] = &[
    (
        "capacitación sin conexión",
        DailyCategory::CapacitacionSinConexionJornadaCompleta,
    ),
    ("sin equipos", DailyCategory::SinEquiposJornadaCompleta),
    ("sin equipo", DailyCategory::SinEquiposJornadaCompleta),
    ("corte de luz", DailyCategory::CorteDeLuzJornadaCompleta),
    ("licencia médica", DailyCategory::LicenciaMedica),
    ("vacacion", DailyCategory::Vacaciones),
    ("descanso", DailyCategory::Libre),
    ("día libre", DailyCategory::Libre),
    ("dia libre", DailyCategory::Libre),
    ("no se presenta", DailyCategory::Ausencia),
    ("internet", DailyCategory::SinInternetJornadaCompleta),
    ("sin internet", DailyCategory::SinInternetJornadaCompleta),
];

/// Classify an activity label into its daily category.
pub fn classify_daily(label: &str) -> DailyCategory {
    let s = label.trim().to_lowercase();
    for (known, cat) in EXACT_RULES {
        if s == *known {
            return *cat;
        }
    }
    for (needle, cat) in CONTAINS_RULES {
        if s.contains(needle) {
            return *cat;
        }
    }
    DEFAULT_CATEGORY
}

/// Keyword set for the Problemas Equipo predicate.
const EQUIPO_KEYWORDS: &[&str] = &[
    "equipo",
    "sin equipo",
    "sin equipos",
    "bloqueo",
    "reseteo",
    "cuenta",
];

/// Classify an activity label into its minutes bucket, if any.
/// Predicate order is load-bearing: a label containing both "capacita" and
/// "internet" belongs to Capacitación.
pub fn classify_minutes(label: &str) -> Option<MinutesCategory> {
    let s = label.trim().to_lowercase();
    if s.contains("capacita") {
        return Some(MinutesCategory::Capacitacion);
    }
    if s.contains("permiso con descuento") {
        return Some(MinutesCategory::PermisoConDescuento);
    }
    if s.contains("internet") {
        return Some(MinutesCategory::ProblemasInternet);
    }
    if EQUIPO_KEYWORDS.iter().any(|k| s.contains(k)) {
        return Some(MinutesCategory::ProblemasEquipo);
    }
    if s.contains("vive tu momentos") {
        return Some(MinutesCategory::ViveTuMomentos);
    }
    None
}
