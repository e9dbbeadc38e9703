//! Tabular input: the activity export and the headcount roster.
//!
//! Both arrive as xlsx workbooks; the first worksheet of each is the table.
//! Parsing is split from file access so the column resolution and coercion
//! rules are testable without fixture files: `read_*_workbook` only turns a
//! calamine range into headers + [`Cell`] rows and hands off to `parse_*`.
//!
//! Coercion rules:
//!   - durations: anything non-numeric becomes 0.0;
//!   - dates: structurally required (grouping key) — an unparseable date is a
//!     fatal error naming the row;
//!   - free text: trimmed, newlines mapped to spaces, doubled spaces
//!     collapsed (the exports carry wrapped header remnants in cells too).

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};
use crate::types::Minutes;

/// One logged activity event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub agent_name: String,
    pub activity_label: String,
    /// Passed through to the detail sheet, unused by the pipeline.
    pub is_paid: String,
    pub duration_minutes: Minutes,
    pub date: NaiveDate,
}

/// One roster row. Names may not match activity-log spellings exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub rut: Option<String>,
    pub agent_name: String,
    pub jornada: Option<String>,
    pub area: Option<String>,
}

/// A single table cell, decoupled from the spreadsheet backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Bool(bool),
}

impl Cell {
    /// Cleaned display text; numbers render without a trailing ".0".
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => clean_text(s),
            Cell::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            Cell::Date(d) => d.format("%Y-%m-%d").to_string(),
            Cell::Bool(b) => b.to_string(),
        }
    }

    /// Duration coercion: invalid values become 0.0.
    pub fn as_minutes(&self) -> Minutes {
        match self {
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().replace(',', ".").parse().unwrap_or(0.0),
            Cell::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            _ => 0.0,
        }
    }

    /// Date coercion. Accepts real date cells and the string formats seen in
    /// the exports; anything else is a parse failure for the caller.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Cell::Date(d) => Some(*d),
            Cell::Text(s) => {
                let s = s.trim();
                // Datetime strings: keep the date part.
                let date_part = s.split_whitespace().next().unwrap_or(s);
                for fmt in ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%Y/%m/%d"] {
                    if let Ok(d) = NaiveDate::parse_from_str(date_part, fmt) {
                        return Some(d);
                    }
                }
                None
            }
            _ => None,
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Int(n) => Cell::Number(*n as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(ndt) => Cell::Date(ndt.date()),
                None => Cell::Number(dt.as_f64()),
            },
            Data::DateTimeIso(s) => Cell::Text(s.clone()),
            Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(e) => Cell::Text(format!("{e:?}")),
        }
    }
}

/// Trim, map embedded newlines to spaces, collapse doubled spaces.
fn clean_text(s: &str) -> String {
    let mut out = s.trim().replace(['\n', '\r'], " ");
    while out.contains("  ") {
        out = out.replace("  ", " ");
    }
    out
}

/// Header comparison form: cleaned + lowercased.
fn normalize_header(s: &str) -> String {
    clean_text(s).to_lowercase()
}

/// Required activity-table columns, by normalized header.
pub const REQUIRED_ACTIVITY_COLUMNS: &[&str] = &[
    "nombre del agente",
    "nombre del código de actividad",
    "es pagado",
    "duración en minutos",
    "fecha",
];

/// Resolve the required activity columns and parse every row.
/// Missing columns are a configuration error naming both the missing set and
/// everything that was actually present.
pub fn parse_activity_table(
    headers: &[String],
    rows: &[Vec<Cell>],
) -> ReportResult<Vec<ActivityRecord>> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
    let mut indices = [0usize; 5];
    let mut missing = Vec::new();
    for (slot, wanted) in REQUIRED_ACTIVITY_COLUMNS.iter().enumerate() {
        match normalized.iter().position(|h| h == wanted) {
            Some(idx) => indices[slot] = idx,
            None => missing.push(wanted.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(ReportError::MissingColumns {
            missing,
            found: headers.iter().map(|h| clean_text(h)).collect(),
        });
    }
    let [agent_idx, activity_idx, paid_idx, duration_idx, date_idx] = indices;

    let mut records = Vec::with_capacity(rows.len());
    for (row_num, row) in rows.iter().enumerate() {
        let cell_at = |idx: usize| row.get(idx).cloned().unwrap_or(Cell::Empty);
        // Fully blank rows (trailing formatting artifacts) are skipped.
        if row.iter().all(Cell::is_empty) {
            continue;
        }
        let date_cell = cell_at(date_idx);
        let date = date_cell.as_date().ok_or_else(|| ReportError::InvalidDate {
            value: date_cell.as_text(),
            row: row_num + 2, // 1-based, after the header row
        })?;
        records.push(ActivityRecord {
            agent_name: cell_at(agent_idx).as_text(),
            activity_label: cell_at(activity_idx).as_text(),
            is_paid: cell_at(paid_idx).as_text(),
            duration_minutes: cell_at(duration_idx).as_minutes(),
            date,
        });
    }
    Ok(records)
}

/// Parse the roster. Columns are resolved by name where possible
/// (rut/agente/jornada/area, case-insensitive) with positional fallback;
/// missing jornada/area degrade to `None` rather than failing.
pub fn parse_roster_table(
    headers: &[String],
    rows: &[Vec<Cell>],
) -> ReportResult<Vec<RosterEntry>> {
    if headers.is_empty() {
        return Err(ReportError::EmptyRoster);
    }
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
    let by_name = |name: &str| normalized.iter().position(|h| h == name);

    let rut_idx = by_name("rut").unwrap_or(0);
    let agent_idx = by_name("agente").unwrap_or(if headers.len() > 1 { 1 } else { 0 });
    let jornada_idx = by_name("jornada").or(if headers.len() > 2 { Some(2) } else { None });
    let area_idx = by_name("area").or(if headers.len() > 3 { Some(3) } else { None });

    let optional_text = |row: &[Cell], idx: Option<usize>| -> Option<String> {
        let cell = idx.and_then(|i| row.get(i))?;
        if cell.is_empty() {
            None
        } else {
            Some(cell.as_text())
        }
    };

    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
        if row.iter().all(Cell::is_empty) {
            continue;
        }
        entries.push(RosterEntry {
            rut: optional_text(row, Some(rut_idx)),
            agent_name: row
                .get(agent_idx)
                .map(Cell::as_text)
                .unwrap_or_default(),
            jornada: optional_text(row, jornada_idx),
            area: optional_text(row, area_idx),
        });
    }
    Ok(entries)
}

/// Read the first worksheet of an xlsx into headers + cell rows.
fn read_first_sheet(path: &Path) -> ReportResult<(Vec<String>, Vec<Vec<Cell>>)> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ReportError::EmptyWorkbook {
            path: path.display().to_string(),
        })?;
    let range: Range<Data> = workbook.worksheet_range(&sheet_name)?;
    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(|d| Cell::from(d).as_text()).collect(),
        None => Vec::new(),
    };
    let body: Vec<Vec<Cell>> = rows
        .map(|row| row.iter().map(Cell::from).collect())
        .collect();
    Ok((headers, body))
}

/// Read the activity export from disk.
pub fn read_activity_workbook(path: &Path) -> ReportResult<Vec<ActivityRecord>> {
    let (headers, rows) = read_first_sheet(path)?;
    let records = parse_activity_table(&headers, &rows)?;
    log::info!(
        "activity table: {} records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Read the roster from disk.
pub fn read_roster_workbook(path: &Path) -> ReportResult<Vec<RosterEntry>> {
    let (headers, rows) = read_first_sheet(path)?;
    let entries = parse_roster_table(&headers, &rows)?;
    log::info!(
        "roster table: {} entries from {}",
        entries.len(),
        path.display()
    );
    Ok(entries)
}
