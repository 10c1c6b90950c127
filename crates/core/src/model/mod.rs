//! Records produced by the extractor.
//!
//! All of these own their text; nothing here borrows from a syntax tree or
//! from the source the tree was parsed from.

use serde::{Deserialize, Serialize};

use crate::error::Diagnostic;

/// One row per function declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
    /// The full rendered block for this function, not just its doc comment.
    #[serde(rename = "doc")]
    pub documentation: String,
    pub package: String,
    pub is_test_function: bool,
}

/// Identifying strings for a source file, supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub file_path: String,
    pub file_name: String,
}

impl FileInfo {
    pub fn new(file_path: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self { file_path: file_path.into(), file_name: file_name.into() }
    }

    /// Derive the file name from the last `/`- or `\`-separated component.
    pub fn from_path(file_path: impl Into<String>) -> Self {
        let file_path = file_path.into();
        let file_name =
            file_path.rsplit(['/', '\\']).next().unwrap_or(file_path.as_str()).to_string();
        Self { file_path, file_name }
    }

    /// Test files are recognised by `_test` anywhere in the file name.
    pub fn is_test_file(&self) -> bool {
        self.file_name.contains("_test")
    }
}

/// Per-file output of the report builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub file_path: String,
    pub file_name: String,
    pub body_text: String,
    pub ordinary_functions: Vec<FunctionRecord>,
    pub test_functions: Vec<FunctionRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    /// Number of function declarations described by this report.
    pub fn function_count(&self) -> usize {
        self.ordinary_functions.len() + self.test_functions.len()
    }
}

/// Knobs for rendering function blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Append the declaration's source text to each block.
    pub include_body: bool,
    /// Emit the body a second time, unfenced, right after the fenced copy.
    pub duplicate_body: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { include_body: false, duplicate_body: true }
    }
}
