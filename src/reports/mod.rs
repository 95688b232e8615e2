pub mod xlsx;

use std::path::PathBuf;

use crate::error::Result;
use crate::models::vacancy::Vacancy;

pub const XLSX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Renders vacancy summaries into a downloadable document.
#[cfg_attr(test, mockall::automock)]
pub trait ReportGenerator: Send + Sync {
    /// Writes the report and returns where it was stored. Fails with
    /// `Error::NoReportData` when `vacancies` is empty.
    fn generate(&self, vacancies: &[Vacancy]) -> Result<PathBuf>;

    fn media_type(&self) -> &'static str;

    fn extension(&self) -> &'static str;
}

/// Reduces a sector name to characters that are safe in file names and headers.
pub fn sanitize_file_component(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "all".to_string()
    } else {
        cleaned
    }
}
