use std::path::PathBuf;

use thiserror::Error;

use crate::syntax::go::ParseError;

/// Everything that can go wrong while extracting a catalog.
///
/// None of these abort a run: load and parse failures skip one file, an
/// unrenderable expression blanks one rendered type.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Source text could not be obtained.
    #[error("Failed to read {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The parser rejected the source text.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// A type expression outside the supported set was encountered.
    #[error("Unknown type: {kind}")]
    UnrenderableExpression { kind: String },
}

/// Convenience result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// A diagnostic surfaced to the caller; one per failure.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// File the diagnostic belongs to, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    LoadFailure,
    ParseFailure,
    UnrenderableExpression,
}

impl From<&ExtractError> for Diagnostic {
    fn from(err: &ExtractError) -> Self {
        let (kind, path) = match err {
            ExtractError::Load { path, .. } => {
                (DiagnosticKind::LoadFailure, Some(path.display().to_string()))
            }
            ExtractError::Parse { path, .. } => {
                (DiagnosticKind::ParseFailure, Some(path.display().to_string()))
            }
            ExtractError::UnrenderableExpression { .. } => {
                (DiagnosticKind::UnrenderableExpression, None)
            }
        };
        Diagnostic { kind, path, message: err.to_string() }
    }
}

impl Diagnostic {
    /// Attach a file path if the diagnostic does not carry one yet.
    pub fn in_file(mut self, path: &str) -> Self {
        if self.path.is_none() {
            self.path = Some(path.to_string());
        }
        self
    }
}
