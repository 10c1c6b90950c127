use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fncat_core::{Catalog, Diagnostic, ExtractOptions, FunctionRecord};
use serde::{Deserialize, Serialize};

pub const DESCRIPTIONS_FILE: &str = "all_function_descriptions.txt";
pub const FUNCTIONS_FILE: &str = "functions.json";
pub const TEST_FUNCTIONS_FILE: &str = "test_functions.json";
pub const MANIFEST_FILE: &str = "manifest.json";

/// Paths of everything an extraction run writes.
///
/// Computing the layout does not touch the filesystem.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    pub root: PathBuf,
    pub descriptions_path: PathBuf,
    pub functions_path: PathBuf,
    pub test_functions_path: PathBuf,
    pub manifest_path: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            descriptions_path: root.join(DESCRIPTIONS_FILE),
            functions_path: root.join(FUNCTIONS_FILE),
            test_functions_path: root.join(TEST_FUNCTIONS_FILE),
            manifest_path: root.join(MANIFEST_FILE),
            root,
        }
    }

    /// Create the output directory (and parents) if missing.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root).with_context(|| {
            format!("error creating output directory: {}", self.root.display())
        })
    }
}

/// One processed input in the run manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestFile {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

/// Summary of one extraction run, written next to the outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunManifest {
    pub tool_version: String,
    pub project: String,
    pub started_at: String,
    pub finished_at: String,
    pub options: ExtractOptions,
    pub files: Vec<ManifestFile>,
    pub file_reports: usize,
    pub functions: usize,
    pub test_functions: usize,
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

/// Compact JSON array of records.
pub fn records_json(records: &[FunctionRecord]) -> Result<String> {
    serde_json::to_string(records).context("failed to marshal data")
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

/// Write the three catalog artifacts and the manifest.
pub fn write_outputs(
    layout: &OutputLayout,
    catalog: &Catalog,
    manifest: &RunManifest,
) -> Result<()> {
    write_file(&layout.descriptions_path, &catalog.combined_descriptions())
        .context("failed to write descriptions to file")?;
    write_file(&layout.test_functions_path, &records_json(&catalog.test_function_records)?)
        .context("failed to write test functions to file")?;
    write_file(&layout.functions_path, &records_json(&catalog.function_records)?)
        .context("failed to write functions to file")?;

    let manifest_json =
        serde_json::to_string_pretty(manifest).context("Failed to serialize run manifest")?;
    write_file(&layout.manifest_path, &manifest_json)?;
    Ok(())
}
