use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("missing required activity columns: {missing:?}; columns present: {found:?}")]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("row {row}: unparseable date value '{value}'")]
    InvalidDate { value: String, row: usize },

    #[error("workbook '{path}' has no worksheets")]
    EmptyWorkbook { path: String },

    #[error("roster table has no columns")]
    EmptyRoster,

    #[error("spreadsheet read error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("workbook write error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
