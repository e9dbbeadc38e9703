//! cierre-core: the closing-report pipeline for daily attendance exports.
//!
//! PIPELINE ORDER (fixed, documented, never reordered):
//!   1. Ingest        — read activity + roster tables          (ingest)
//!   2. Classify      — attach daily/minutes categories        (classifier)
//!   3. Dominance     — one winning record per agent-day       (dominance)
//!   4. Aggregate     — category pivot + minutes pivot         (aggregate)
//!   5. Enrich        — join roster metadata via name matching (enrich, matcher)
//!   6. Export        — three-sheet reporting workbook         (workbook)
//!
//! RULES:
//!   - Every stage is a pure function over the previous stage's output;
//!     only ingest and workbook touch the filesystem.
//!   - Classification tables are process-wide constants, read-only.
//!   - Zero cells are blanked at the serialization boundary only; all
//!     aggregates stay zero-filled internally so totals come out right.

pub mod aggregate;
pub mod classifier;
pub mod config;
pub mod dominance;
pub mod enrich;
pub mod error;
pub mod ingest;
pub mod matcher;
pub mod normalize;
pub mod pipeline;
pub mod types;
pub mod workbook;
