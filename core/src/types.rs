//! Shared primitive types used across the entire pipeline.

/// A free-text agent name as it appears in the activity export.
pub type AgentName = String;

/// Activity duration in minutes. Kept as f64 end to end; invalid source
/// values are coerced to 0.0 at ingest time.
pub type Minutes = f64;

/// The synthetic grand-total row label used by both summary sheets.
pub const TOTAL_LABEL: &str = "TOTAL";
