//! Run configuration: where the two inputs live and where the report goes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ReportResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Daily activity export (xlsx).
    pub activity_file: PathBuf,
    /// Headcount roster (xlsx).
    pub roster_file: PathBuf,
    /// Output workbook path; overwritten on each run.
    pub output_file: PathBuf,
}

impl ReportConfig {
    /// Load from a JSON file. Flags on the runner are the alternative.
    pub fn load(path: &Path) -> ReportResult<Self> {
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }
}
