//! Daily dominance resolution: one record represents each agent-day.
//!
//! Business rule: the longest activity of the day is that day's status.
//! Ties go to the first-encountered record in input order, which a stable
//! sort preserves for free.

use chrono::NaiveDate;

use crate::classifier::{classify_daily, DailyCategory};
use crate::ingest::ActivityRecord;

/// The winning record for one (agent, date) pair, with its daily category.
#[derive(Debug, Clone)]
pub struct DailyTopRow {
    pub record: ActivityRecord,
    pub category: DailyCategory,
}

/// Collapse activity records to exactly one row per (agent, date), ordered by
/// agent ascending then date ascending.
pub fn resolve_daily_top(records: &[ActivityRecord]) -> Vec<DailyTopRow> {
    let mut sorted: Vec<&ActivityRecord> = records.iter().collect();
    // Stable sort: equal-duration records keep input order, so .first()
    // semantics fall out of taking the head of each group.
    sorted.sort_by(|a, b| {
        a.agent_name
            .cmp(&b.agent_name)
            .then(a.date.cmp(&b.date))
            .then(
                b.duration_minutes
                    .partial_cmp(&a.duration_minutes)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
    });

    let mut out: Vec<DailyTopRow> = Vec::new();
    let mut last_key: Option<(&str, NaiveDate)> = None;
    for record in sorted {
        let key = (record.agent_name.as_str(), record.date);
        if last_key != Some(key) {
            out.push(DailyTopRow {
                category: classify_daily(&record.activity_label),
                record: record.clone(),
            });
            last_key = Some(key);
        }
    }
    out
}
