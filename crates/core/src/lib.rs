//! fncat-core
//!
//! Core library for extracting function catalogs from Go source files.
//!
//! For every function declaration this crate produces a rendered description
//! block (doc comment, receiver, parameters, results, calls, optional body)
//! and a [`model::FunctionRecord`]; per-file reports are gathered into a
//! project-wide [`catalog::Catalog`].
//!
//! Layering, leaves first:
//! - [`syntax`]: the typed tree and its Go front end.
//! - [`render`]: type expressions and field lists.
//! - [`describe`]: one function declaration.
//! - [`report`]: one file.
//! - [`catalog`]: many files.
//! - [`pipeline`]: load, parse, and aggregate with per-file failure isolation.
//!
//! Nothing here writes to disk; frontends own discovery and output.

pub mod catalog;
pub mod config;
pub mod describe;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod syntax;

pub use catalog::Catalog;
pub use config::ExtractConfig;
pub use error::{Diagnostic, DiagnosticKind, ExtractError, ExtractResult};
pub use model::{ExtractOptions, FileInfo, FileReport, FunctionRecord};
pub use pipeline::Extractor;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
