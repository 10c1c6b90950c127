//! Load, parse, report and aggregate, one file at a time.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::{Diagnostic, ExtractError, ExtractResult};
use crate::model::{ExtractOptions, FileInfo, FileReport};
use crate::report::build_report;
use crate::syntax::go;

/// Source of raw file text.
pub trait SourceLoader {
    fn load(&self, path: &Path) -> io::Result<String>;
}

/// Reads files from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn load(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Serves sources from memory; unknown paths fail with `NotFound`.
#[derive(Debug, Default, Clone)]
pub struct MemoryLoader {
    files: HashMap<PathBuf, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        self.files.insert(path.into(), source.into());
        self
    }
}

impl SourceLoader for MemoryLoader {
    fn load(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file: {}", path.display()))
        })
    }
}

/// Parse one source text and build its report.
///
/// The tree is built from `source` and only ever sliced against that same
/// text.
pub fn report_for_source(
    info: &FileInfo,
    source: &str,
    options: ExtractOptions,
) -> ExtractResult<FileReport> {
    let tree = go::parse(source)
        .map_err(|err| ExtractError::Parse { path: PathBuf::from(&info.file_path), source: err })?;
    Ok(build_report(info, &tree, source, options))
}

/// Drives the pipeline over a list of files.
pub struct Extractor<L: SourceLoader = FsLoader> {
    loader: L,
    options: ExtractOptions,
}

impl Extractor<FsLoader> {
    pub fn new(options: ExtractOptions) -> Self {
        Self { loader: FsLoader, options }
    }
}

impl<L: SourceLoader> Extractor<L> {
    pub fn with_loader(loader: L, options: ExtractOptions) -> Self {
        Self { loader, options }
    }

    pub fn options(&self) -> ExtractOptions {
        self.options
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Load, parse, and report a single file.
    pub fn extract_file(&self, path: &Path) -> ExtractResult<FileReport> {
        let source = self
            .loader
            .load(path)
            .map_err(|err| ExtractError::Load { path: path.to_path_buf(), source: err })?;
        let info = FileInfo::from_path(path.display().to_string());
        report_for_source(&info, &source, self.options)
    }

    /// Process one file into `catalog`.
    ///
    /// Load and parse failures are recorded as diagnostics and the file is
    /// skipped; they never abort the run.
    pub fn process(&self, catalog: &mut Catalog, path: &Path) {
        match self.extract_file(path) {
            Ok(report) => {
                tracing::debug!(
                    file = %path.display(),
                    functions = report.function_count(),
                    "processed"
                );
                catalog.add(report);
            }
            Err(err) => {
                tracing::warn!(file = %path.display(), error = %err, "skipping file");
                catalog.record_failure(Diagnostic::from(&err));
            }
        }
    }

    /// Process every path in order and return the resulting catalog.
    pub fn run<I, P>(&self, paths: I) -> Catalog
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut catalog = Catalog::new();
        for path in paths {
            self.process(&mut catalog, path.as_ref());
        }
        catalog
    }
}
