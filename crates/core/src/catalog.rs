//! Project-wide accumulation of file reports.

use serde::{Deserialize, Serialize};

use crate::error::Diagnostic;
use crate::model::{FileReport, FunctionRecord};

/// Title line of the combined description export.
pub const DESCRIPTIONS_HEADER: &str =
    "#### This is detailed description of all functions in the project its references\n";

/// Aggregate result of a run, in file-processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub file_reports: Vec<String>,
    pub function_records: Vec<FunctionRecord>,
    pub test_function_records: Vec<FunctionRecord>,
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file's report and records.
    pub fn add(&mut self, report: FileReport) {
        let FileReport { body_text, ordinary_functions, test_functions, diagnostics, .. } = report;
        self.file_reports.push(body_text);
        self.function_records.extend(ordinary_functions);
        self.test_function_records.extend(test_functions);
        self.diagnostics.extend(diagnostics);
    }

    /// Record a file that contributed nothing.
    pub fn record_failure(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Number of function records across both lists.
    pub fn function_count(&self) -> usize {
        self.function_records.len() + self.test_function_records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file_reports.is_empty()
            && self.function_records.is_empty()
            && self.test_function_records.is_empty()
    }

    /// The full-text export: a title line followed by every file report.
    pub fn combined_descriptions(&self) -> String {
        let mut out = String::from(DESCRIPTIONS_HEADER);
        for report in &self.file_reports {
            out.push_str(report);
        }
        out
    }
}

impl Extend<FileReport> for Catalog {
    fn extend<T: IntoIterator<Item = FileReport>>(&mut self, iter: T) {
        for report in iter {
            self.add(report);
        }
    }
}

impl FromIterator<FileReport> for Catalog {
    fn from_iter<T: IntoIterator<Item = FileReport>>(iter: T) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}
