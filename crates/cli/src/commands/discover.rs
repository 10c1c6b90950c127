use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use fncat_core::ExtractConfig;
use walkdir::WalkDir;

use crate::file_name_of;

/// Walk `root` recursively and return source files accepted by `config`.
///
/// Entries are visited in lexical order so runs over the same tree always
/// process files in the same sequence.
pub fn find_source_files(root: &Path, config: &ExtractConfig) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(anyhow!("project path does not exist: {}", root.display()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry
            .with_context(|| format!("failed to walk project directory {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if config.accepts_file_name(&file_name_of(&path)) {
            files.push(path);
        }
    }
    Ok(files)
}

/// Print the files an extraction would process.
pub fn list_files_command(project: &str, config: &ExtractConfig, json: bool) -> Result<()> {
    let files = find_source_files(Path::new(project), config)?;

    if json {
        let paths: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
        let serialized =
            serde_json::to_string_pretty(&paths).context("Failed to serialize file list to JSON")?;
        println!("{}", serialized);
    } else {
        println!("Source files ({}):", files.len());
        if files.is_empty() {
            println!("  (none)");
            return Ok(());
        }
        for file in files {
            println!("  - {}", file.display());
        }
    }

    Ok(())
}
