use std::path::Path;

use anyhow::{anyhow, Result};
use chrono::Utc;
use fncat_core::{Catalog, ExtractConfig, Extractor};

use crate::commands::{find_source_files, write_outputs, ManifestFile, OutputLayout, RunManifest};
use crate::{resolve_dir, HashingLoader};

/// Everything an extraction run produced.
#[derive(Debug)]
pub struct ExtractRun {
    pub layout: OutputLayout,
    pub catalog: Catalog,
    pub manifest: RunManifest,
}

/// Extract a catalog from `project` and write it to `output`.
///
/// Unreadable or unparseable sources are skipped with a diagnostic; a
/// missing project directory or an unwritable output directory fails the
/// run.
pub fn run_extraction(project: &str, output: &str, config: &ExtractConfig) -> Result<ExtractRun> {
    let project_path = Path::new(project);
    if !project_path.exists() {
        return Err(anyhow!("project path does not exist: {}", project_path.display()));
    }

    let layout = OutputLayout::new(resolve_dir(output)?);
    layout.ensure_dir()?;

    let started_at = Utc::now().to_rfc3339();
    let files = find_source_files(project_path, config)?;
    tracing::info!(project = %project_path.display(), files = files.len(), "discovered sources");

    let extractor = Extractor::with_loader(HashingLoader::new(), config.options());
    let catalog = extractor.run(&files);

    let manifest_files = files
        .iter()
        .map(|path| ManifestFile {
            path: path.display().to_string(),
            sha256: extractor.loader().digest(path),
        })
        .collect();

    let manifest = RunManifest {
        tool_version: fncat_core::version().to_string(),
        project: project_path.display().to_string(),
        started_at,
        finished_at: Utc::now().to_rfc3339(),
        options: extractor.options(),
        files: manifest_files,
        file_reports: catalog.file_reports.len(),
        functions: catalog.function_records.len(),
        test_functions: catalog.test_function_records.len(),
        diagnostics: catalog.diagnostics.clone(),
    };

    write_outputs(&layout, &catalog, &manifest)?;
    tracing::info!(
        functions = manifest.functions,
        test_functions = manifest.test_functions,
        diagnostics = manifest.diagnostics.len(),
        "extraction finished"
    );

    Ok(ExtractRun { layout, catalog, manifest })
}

/// `extract` command: run the extraction and print a summary.
pub fn extract_command(project: &str, output: &str, config: &ExtractConfig) -> Result<()> {
    let run = run_extraction(project, output, config)?;

    println!("Extracted function catalog:");
    println!("  Project: {}", run.manifest.project);
    println!("  Files: {}", run.manifest.files.len());
    println!("  File reports: {}", run.manifest.file_reports);
    println!("  Functions: {}", run.manifest.functions);
    println!("  Test functions: {}", run.manifest.test_functions);
    println!("  Output dir: {}", run.layout.root.display());
    if !run.manifest.diagnostics.is_empty() {
        println!("  Diagnostics ({}):", run.manifest.diagnostics.len());
        for diag in &run.manifest.diagnostics {
            println!("    - {}", diag.message);
        }
    }

    Ok(())
}
