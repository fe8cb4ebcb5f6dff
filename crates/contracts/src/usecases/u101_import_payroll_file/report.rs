use serde::{Deserialize, Serialize};

/// Metadata of the uploaded payroll file, echoed back in the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportedFile {
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(rename = "sizeKB")]
    pub size_kb: u64,
}

/// Diagnostic for one skipped line: 1-based line number plus the first
/// three field values, which are the natural-key columns of the row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    pub line: usize,
    pub values: Vec<String>,
}

/// Outcome of one import run. Ephemeral: built per upload, returned to the
/// caller, never persisted by the importer itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub file: ImportedFile,
    pub inserted: usize,
    pub skipped: usize,
    #[serde(rename = "totalLines")]
    pub total_lines: usize,
    #[serde(rename = "skippedRows")]
    pub skipped_rows: Vec<SkippedRow>,
    pub message: String,
}

impl ImportReport {
    pub fn summary_message(inserted: usize, skipped: usize) -> String {
        format!(
            "Import finished: {} rows inserted, {} rows skipped",
            inserted, skipped
        )
    }
}
