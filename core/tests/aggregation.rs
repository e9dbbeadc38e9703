//! Pivot aggregation: row/column totals, the zero-agent filter on the
//! minutes pivot, and the rounding contract on Total Horas.

use chrono::NaiveDate;
use cierre_core::aggregate::{build_category_summary, build_minutes_summary};
use cierre_core::classifier::DailyCategory;
use cierre_core::dominance::resolve_daily_top;
use cierre_core::ingest::ActivityRecord;

fn record(agent: &str, label: &str, minutes: f64, day: u32) -> ActivityRecord {
    ActivityRecord {
        agent_name: agent.to_string(),
        activity_label: label.to_string(),
        is_paid: "Sí".to_string(),
        duration_minutes: minutes,
        date: NaiveDate::from_ymd_opt(2024, 10, day).unwrap(),
    }
}

/// Row sums equal each agent's count of agent-days; the TOTAL row's grand
/// total equals the overall agent-day count.
#[test]
fn category_pivot_totals_are_consistent() {
    let records = vec![
        record("Ana", "En la cola", 480.0, 1),
        record("Ana", "Vacaciones", 480.0, 2),
        record("Ana", "Festivo", 480.0, 3),
        record("Beto", "En la cola", 480.0, 1),
        record("Beto", "No se presenta", 0.0, 2),
    ];
    let top = resolve_daily_top(&records);
    let summary = build_category_summary(&top);

    assert_eq!(summary.rows.len(), 2);
    let ana = &summary.rows[0];
    assert_eq!(ana.agent, "Ana");
    assert_eq!(ana.total, 3);
    assert_eq!(ana.counts.iter().sum::<i64>(), ana.total);
    assert_eq!(ana.counts[DailyCategory::Presente.index()], 1);
    assert_eq!(ana.counts[DailyCategory::Vacaciones.index()], 1);
    assert_eq!(ana.counts[DailyCategory::Festivo.index()], 1);

    let beto = &summary.rows[1];
    assert_eq!(beto.total, 2);
    assert_eq!(beto.counts[DailyCategory::Ausencia.index()], 1);

    assert_eq!(summary.total_row.agent, "TOTAL");
    assert_eq!(summary.total_row.total, 5);
    assert_eq!(summary.total_row.counts[DailyCategory::Presente.index()], 2);
}

/// Aggregates stay zero-filled internally; blanking is the writer's job.
#[test]
fn category_pivot_keeps_internal_zeros() {
    let records = vec![record("Ana", "En la cola", 480.0, 1)];
    let summary = build_category_summary(&resolve_daily_top(&records));
    let ana = &summary.rows[0];
    assert_eq!(ana.counts[DailyCategory::Vacaciones.index()], 0);
    assert_eq!(ana.counts.iter().filter(|c| **c == 0).count(), 12);
}

/// Agents whose five minutes categories sum to zero never appear as rows.
#[test]
fn minutes_pivot_drops_zero_agents() {
    let records = vec![
        // Classifies into Capacitación but with zero minutes.
        record("Ana", "Capacitación", 0.0, 1),
        record("Beto", "Capacitación", 120.0, 1),
        // No minutes classification at all.
        record("Cata", "En la cola", 480.0, 1),
    ];
    let summary = build_minutes_summary(&records);
    let agents = summary.agent_names();
    assert_eq!(agents, vec!["Beto"]);
}

/// Total Horas on the TOTAL row is recomputed from the summed minutes, not
/// accumulated from the individually rounded per-agent hours.
#[test]
fn total_hours_recomputed_from_summed_minutes() {
    let records = vec![
        record("Ana", "Capacitación", 50.0, 1),
        record("Beto", "Capacitación", 50.0, 1),
        record("Cata", "Capacitación", 50.0, 1),
    ];
    let summary = build_minutes_summary(&records);
    for row in &summary.rows {
        assert_eq!(row.total_hours, 0.83, "per-agent hours round to 0.83");
    }
    let total = summary.total_row.as_ref().unwrap();
    assert_eq!(total.total_minutes, 150.0);
    // 150 / 60 = 2.5 exactly; naively summing 0.83 * 3 would give 2.49.
    assert_eq!(total.total_hours, 2.5);
}

/// Minutes sums accumulate across multiple records of the same agent and
/// bucket, and split across buckets.
#[test]
fn minutes_sums_per_bucket() {
    use cierre_core::classifier::MinutesCategory;
    let records = vec![
        record("Ana", "Capacitación", 60.0, 1),
        record("Ana", "Capacitación Jornada Completa", 30.0, 2),
        record("Ana", "Problemas técnicos (internet)", 45.0, 3),
    ];
    let summary = build_minutes_summary(&records);
    let ana = &summary.rows[0];
    assert_eq!(ana.minutes[MinutesCategory::Capacitacion.index()], 90.0);
    assert_eq!(ana.minutes[MinutesCategory::ProblemasInternet.index()], 45.0);
    assert_eq!(ana.total_minutes, 135.0);
    assert_eq!(ana.total_hours, 2.25);
}

/// With nothing classified into any bucket the summary is empty and carries
/// no TOTAL row.
#[test]
fn minutes_pivot_empty_when_nothing_classifies() {
    let records = vec![
        record("Ana", "En la cola", 480.0, 1),
        record("Ana", "Vacaciones", 480.0, 2),
    ];
    let summary = build_minutes_summary(&records);
    assert!(summary.is_empty());
    assert!(summary.total_row.is_none());
}
