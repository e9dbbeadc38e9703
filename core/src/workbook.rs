//! The three-sheet reporting workbook.
//!
//! Sheets:
//!   - "Resumen"             — daily-category pivot with roster metadata
//!   - "Resumen_minutos"     — minutes pivot with roster metadata
//!   - "Detalle_top_por_día" — the winning record per agent-day, verbatim
//!
//! Zero cells on the two summary sheets are left blank for readability;
//! totals were computed upstream on the zero-filled aggregates, so blanking
//! here cannot corrupt them. The detail sheet never blanks anything.
//! The file is saved in one shot: a failed run leaves no partial artifact.

use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet};

use crate::aggregate::{category_headers, minutes_headers};
use crate::error::ReportResult;
use crate::pipeline::ReportOutput;

const SHEET_SUMMARY: &str = "Resumen";
const SHEET_MINUTES: &str = "Resumen_minutos";
const SHEET_DETAIL: &str = "Detalle_top_por_día";

const META_HEADERS: [&str; 4] = ["Nombre del agente", "RUT", "JORNADA", "AREA"];

/// Minimum column width; wider headers get their length + 2.
const MIN_COLUMN_WIDTH: usize = 12;

fn write_header_row(sheet: &mut Worksheet, headers: &[String]) -> ReportResult<()> {
    for (col, header) in headers.iter().enumerate() {
        sheet.write(0, col as u16, header)?;
        let width = MIN_COLUMN_WIDTH.max(header.chars().count() + 2);
        sheet.set_column_width(col as u16, width as f64)?;
    }
    Ok(())
}

fn write_optional_text(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &Option<String>,
) -> ReportResult<()> {
    if let Some(text) = value {
        sheet.write(row, col, text)?;
    }
    Ok(())
}

/// Write a numeric cell, blanking zeros.
fn write_nonzero(sheet: &mut Worksheet, row: u32, col: u16, value: f64) -> ReportResult<()> {
    if value != 0.0 {
        sheet.write(row, col, value)?;
    }
    Ok(())
}

fn add_summary_sheet(workbook: &mut Workbook, out: &ReportOutput) -> ReportResult<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_SUMMARY)?;

    let mut headers: Vec<String> = META_HEADERS.iter().map(|h| h.to_string()).collect();
    headers.extend(category_headers().iter().map(|h| h.to_string()));
    headers.push("Total general".to_string());
    write_header_row(sheet, &headers)?;

    let mut row: u32 = 1;
    for (summary_row, meta) in out.category.rows.iter().zip(out.category_meta.iter()) {
        sheet.write(row, 0, &summary_row.agent)?;
        write_optional_text(sheet, row, 1, &meta.rut)?;
        write_optional_text(sheet, row, 2, &meta.jornada)?;
        write_optional_text(sheet, row, 3, &meta.area)?;
        for (slot, count) in summary_row.counts.iter().enumerate() {
            write_nonzero(sheet, row, 4 + slot as u16, *count as f64)?;
        }
        write_nonzero(sheet, row, 17, summary_row.total as f64)?;
        row += 1;
    }

    // TOTAL last, metadata blank.
    let total = &out.category.total_row;
    sheet.write(row, 0, &total.agent)?;
    for (slot, count) in total.counts.iter().enumerate() {
        write_nonzero(sheet, row, 4 + slot as u16, *count as f64)?;
    }
    write_nonzero(sheet, row, 17, total.total as f64)?;
    Ok(())
}

fn add_minutes_sheet(workbook: &mut Workbook, out: &ReportOutput) -> ReportResult<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_MINUTES)?;

    // With nothing classified into any minutes bucket the sheet is
    // header-only, and without metadata columns (there is nothing to enrich).
    if out.minutes.is_empty() {
        let mut headers = vec!["Nombre del agente".to_string()];
        headers.extend(minutes_headers().iter().map(|h| h.to_string()));
        headers.push("Total Minutos".to_string());
        headers.push("Total Horas".to_string());
        write_header_row(sheet, &headers)?;
        return Ok(());
    }

    let mut headers: Vec<String> = META_HEADERS.iter().map(|h| h.to_string()).collect();
    headers.extend(minutes_headers().iter().map(|h| h.to_string()));
    headers.push("Total Minutos".to_string());
    headers.push("Total Horas".to_string());
    write_header_row(sheet, &headers)?;

    let mut row: u32 = 1;
    for (summary_row, meta) in out.minutes.rows.iter().zip(out.minutes_meta.iter()) {
        sheet.write(row, 0, &summary_row.agent)?;
        write_optional_text(sheet, row, 1, &meta.rut)?;
        write_optional_text(sheet, row, 2, &meta.jornada)?;
        write_optional_text(sheet, row, 3, &meta.area)?;
        for (slot, minutes) in summary_row.minutes.iter().enumerate() {
            write_nonzero(sheet, row, 4 + slot as u16, *minutes)?;
        }
        write_nonzero(sheet, row, 9, summary_row.total_minutes)?;
        write_nonzero(sheet, row, 10, summary_row.total_hours)?;
        row += 1;
    }

    if let Some(total) = &out.minutes.total_row {
        sheet.write(row, 0, &total.agent)?;
        for (slot, minutes) in total.minutes.iter().enumerate() {
            write_nonzero(sheet, row, 4 + slot as u16, *minutes)?;
        }
        write_nonzero(sheet, row, 9, total.total_minutes)?;
        write_nonzero(sheet, row, 10, total.total_hours)?;
    }
    Ok(())
}

fn add_detail_sheet(workbook: &mut Workbook, out: &ReportOutput) -> ReportResult<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_DETAIL)?;

    let headers: Vec<String> = [
        "Nombre del agente",
        "Fecha",
        "Nombre del código de actividad",
        "Es Pagado",
        "Duración en minutos",
        "Categoría",
    ]
    .iter()
    .map(|h| h.to_string())
    .collect();
    write_header_row(sheet, &headers)?;

    for (i, top) in out.detail.iter().enumerate() {
        let row = (i + 1) as u32;
        let record = &top.record;
        sheet.write(row, 0, &record.agent_name)?;
        sheet.write(row, 1, record.date.format("%Y-%m-%d").to_string())?;
        sheet.write(row, 2, &record.activity_label)?;
        sheet.write(row, 3, &record.is_paid)?;
        sheet.write(row, 4, record.duration_minutes)?;
        sheet.write(row, 5, top.category.label())?;
    }
    Ok(())
}

/// Assemble the full workbook in memory.
pub fn build_workbook(out: &ReportOutput) -> ReportResult<Workbook> {
    let mut workbook = Workbook::new();
    add_summary_sheet(&mut workbook, out)?;
    add_minutes_sheet(&mut workbook, out)?;
    add_detail_sheet(&mut workbook, out)?;
    Ok(workbook)
}

/// Build and save the report. The save is atomic from the pipeline's point of
/// view: nothing hits disk until the whole workbook is assembled.
pub fn write_report(path: &Path, out: &ReportOutput) -> ReportResult<()> {
    let mut workbook = build_workbook(out)?;
    workbook.save(path)?;
    log::info!("report written to {}", path.display());
    Ok(())
}
