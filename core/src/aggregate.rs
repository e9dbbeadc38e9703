//! The two pivot summaries.
//!
//! Both keep zero-filled cells internally; zero-to-blank substitution is the
//! workbook writer's problem. Agents are ordered by name ascending, and the
//! grand-total row is synthetic (it never goes through roster matching).

use std::collections::BTreeMap;

use crate::classifier::{classify_minutes, DailyCategory, MinutesCategory};
use crate::dominance::DailyTopRow;
use crate::ingest::ActivityRecord;
use crate::types::Minutes;

/// Round to 2 decimals, matching the hours column contract.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// One agent row of the daily-category pivot.
#[derive(Debug, Clone)]
pub struct CategorySummaryRow {
    pub agent: String,
    /// Counts indexed by [`DailyCategory::ALL`] position.
    pub counts: [i64; 13],
    /// Row sum ("Total general").
    pub total: i64,
}

/// Counts of dominant daily category per agent, plus the TOTAL row.
#[derive(Debug, Clone)]
pub struct CategorySummary {
    pub rows: Vec<CategorySummaryRow>,
    pub total_row: CategorySummaryRow,
}

impl CategorySummary {
    /// Agent names in row order, excluding the synthetic TOTAL.
    pub fn agent_names(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.agent.clone()).collect()
    }
}

/// Count resolved agent-days per (agent, daily category).
pub fn build_category_summary(top_rows: &[DailyTopRow]) -> CategorySummary {
    let mut per_agent: BTreeMap<String, [i64; 13]> = BTreeMap::new();
    for row in top_rows {
        let counts = per_agent
            .entry(row.record.agent_name.clone())
            .or_insert([0; 13]);
        counts[row.category.index()] += 1;
    }

    let mut rows = Vec::with_capacity(per_agent.len());
    let mut column_sums = [0i64; 13];
    for (agent, counts) in per_agent {
        for (slot, n) in counts.iter().enumerate() {
            column_sums[slot] += n;
        }
        rows.push(CategorySummaryRow {
            agent,
            counts,
            total: counts.iter().sum(),
        });
    }
    let total_row = CategorySummaryRow {
        agent: crate::types::TOTAL_LABEL.to_string(),
        counts: column_sums,
        total: column_sums.iter().sum(),
    };
    CategorySummary { rows, total_row }
}

/// One agent row of the minutes pivot.
#[derive(Debug, Clone)]
pub struct MinutesSummaryRow {
    pub agent: String,
    /// Minute sums indexed by [`MinutesCategory::ALL`] position.
    pub minutes: [Minutes; 5],
    pub total_minutes: Minutes,
    /// total_minutes / 60, rounded to 2 decimals.
    pub total_hours: f64,
}

/// Minute sums per agent over the 5 minutes categories, plus the TOTAL row.
/// Empty (and without a TOTAL row) when no record classifies into any bucket.
#[derive(Debug, Clone)]
pub struct MinutesSummary {
    pub rows: Vec<MinutesSummaryRow>,
    pub total_row: Option<MinutesSummaryRow>,
}

impl MinutesSummary {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Agent names in row order, excluding the synthetic TOTAL.
    pub fn agent_names(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.agent.clone()).collect()
    }
}

/// Sum minutes per (agent, minutes category) over records with a minutes
/// classification. Agents whose 5-category sum is zero are dropped entirely;
/// the category pivot keeps every agent, this one does not.
pub fn build_minutes_summary(records: &[ActivityRecord]) -> MinutesSummary {
    let mut per_agent: BTreeMap<String, [Minutes; 5]> = BTreeMap::new();
    for record in records {
        let Some(category) = classify_minutes(&record.activity_label) else {
            continue;
        };
        let sums = per_agent
            .entry(record.agent_name.clone())
            .or_insert([0.0; 5]);
        sums[category.index()] += record.duration_minutes;
    }

    let mut rows = Vec::new();
    let mut column_sums = [0.0; 5];
    for (agent, minutes) in per_agent {
        let total_minutes: Minutes = minutes.iter().sum();
        if total_minutes <= 0.0 {
            continue;
        }
        for (slot, m) in minutes.iter().enumerate() {
            column_sums[slot] += m;
        }
        rows.push(MinutesSummaryRow {
            agent,
            minutes,
            total_minutes,
            total_hours: round2(total_minutes / 60.0),
        });
    }

    let total_row = if rows.is_empty() {
        None
    } else {
        let total_minutes: Minutes = column_sums.iter().sum();
        Some(MinutesSummaryRow {
            agent: crate::types::TOTAL_LABEL.to_string(),
            minutes: column_sums,
            total_minutes,
            // Recomputed from the summed minutes, never from per-agent hours:
            // summing rounded values drifts from the rounded sum.
            total_hours: round2(total_minutes / 60.0),
        })
    };
    MinutesSummary { rows, total_row }
}

/// Column headers for the category pivot, in output order.
pub fn category_headers() -> Vec<&'static str> {
    DailyCategory::ALL.iter().map(|c| c.label()).collect()
}

/// Column headers for the minutes pivot, in output order.
pub fn minutes_headers() -> Vec<&'static str> {
    MinutesCategory::ALL.iter().map(|c| c.label()).collect()
}
