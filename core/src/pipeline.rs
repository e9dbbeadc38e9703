//! End-to-end orchestration: read, build, write.
//!
//! `build_report` is the pure core — everything between the two I/O
//! boundaries — so the integration tests drive it directly on in-memory
//! records without touching the filesystem.

use crate::aggregate::{
    build_category_summary, build_minutes_summary, CategorySummary, MinutesSummary,
};
use crate::config::ReportConfig;
use crate::dominance::{resolve_daily_top, DailyTopRow};
use crate::enrich::{enrich_agents, RosterMeta};
use crate::error::ReportResult;
use crate::ingest::{read_activity_workbook, read_roster_workbook, ActivityRecord, RosterEntry};
use crate::workbook::write_report;

/// Everything the workbook writer needs, fully aggregated and enriched.
#[derive(Debug, Clone)]
pub struct ReportOutput {
    pub category: CategorySummary,
    /// Parallel to `category.rows`; the TOTAL row carries no metadata.
    pub category_meta: Vec<RosterMeta>,
    pub minutes: MinutesSummary,
    /// Parallel to `minutes.rows`.
    pub minutes_meta: Vec<RosterMeta>,
    /// One row per agent-day, for the detail sheet.
    pub detail: Vec<DailyTopRow>,
}

/// Counters for the runner's summary printout.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub activity_rows: usize,
    pub roster_rows: usize,
    pub agent_days: usize,
    pub category_agents: usize,
    pub minutes_agents: usize,
}

/// The pure pipeline: dominance resolution, both pivots, roster enrichment.
pub fn build_report(records: &[ActivityRecord], roster: &[RosterEntry]) -> ReportOutput {
    let detail = resolve_daily_top(records);
    let category = build_category_summary(&detail);
    let minutes = build_minutes_summary(records);

    let category_meta = enrich_agents(&category.agent_names(), roster);
    let minutes_meta = enrich_agents(&minutes.agent_names(), roster);

    log::info!(
        "report built: {} agent-days, {} agents, {} agents with minutes",
        detail.len(),
        category.rows.len(),
        minutes.rows.len()
    );

    ReportOutput {
        category,
        category_meta,
        minutes,
        minutes_meta,
        detail,
    }
}

/// One full batch run: read both tables, build the report, write the workbook.
pub fn run(config: &ReportConfig) -> ReportResult<RunSummary> {
    let records = read_activity_workbook(&config.activity_file)?;
    let roster = read_roster_workbook(&config.roster_file)?;

    let output = build_report(&records, &roster);
    write_report(&config.output_file, &output)?;

    Ok(RunSummary {
        activity_rows: records.len(),
        roster_rows: roster.len(),
        agent_days: output.detail.len(),
        category_agents: output.category.rows.len(),
        minutes_agents: output.minutes.rows.len(),
    })
}
