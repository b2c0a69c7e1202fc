use crate::extractor::ScanStatistics;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Result of a successful submission check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub info_file: PathBuf,
    pub name: String,
    pub matriculation_number: String,
    pub checked_at: DateTime<Utc>,
    pub lines_scanned: usize,
}

impl CheckReport {
    pub fn new(
        info_file: PathBuf,
        name: String,
        matriculation_number: String,
        statistics: &ScanStatistics,
    ) -> Self {
        Self {
            info_file,
            name,
            matriculation_number,
            checked_at: Utc::now(),
            lines_scanned: statistics.lines_scanned,
        }
    }

    /// The exact confirmation block shown to the student on stdout.
    pub fn confirmation_message(&self) -> String {
        format!(
            "Assigning this submission to:\n   {} with MatrNr. {}\nPlease double-check that this is correct!",
            self.name, self.matriculation_number
        )
    }
}
