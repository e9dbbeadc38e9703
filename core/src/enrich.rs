//! Roster metadata enrichment for summary rows.

use crate::ingest::RosterEntry;
use crate::matcher::best_match;

/// Metadata attached to each enriched summary row. All-`None` means the
/// agent had no roster match above the similarity floor.
#[derive(Debug, Clone, Default)]
pub struct RosterMeta {
    pub rut: Option<String>,
    pub jornada: Option<String>,
    pub area: Option<String>,
}

/// Look up roster metadata for each agent, preserving input order. The output
/// is parallel to `agents`; unmatched agents get default (all-absent) metadata
/// and the run continues.
pub fn enrich_agents(agents: &[String], roster: &[RosterEntry]) -> Vec<RosterMeta> {
    let candidate_names: Vec<String> = roster.iter().map(|e| e.agent_name.clone()).collect();
    agents
        .iter()
        .map(|agent| {
            let Some(matched) = best_match(agent, &candidate_names) else {
                log::warn!("no roster match for agent '{agent}'");
                return RosterMeta::default();
            };
            // First roster entry carrying the matched name wins.
            roster
                .iter()
                .find(|e| e.agent_name == matched)
                .map(|e| RosterMeta {
                    rut: e.rut.clone(),
                    jornada: e.jornada.clone(),
                    area: e.area.clone(),
                })
                .unwrap_or_default()
        })
        .collect()
}
