use serde::{Deserialize, Serialize};

use crate::model::ExtractOptions;

fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    vec!["go".to_string()]
}

fn default_exclude_substrings() -> Vec<String> {
    vec!["generated".to_string()]
}

/// Serializable extraction settings.
///
/// Every field has a default, so an empty document (`{}`) is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Append each function's source text to its block.
    #[serde(default)]
    pub include_body: bool,
    /// Repeat the body unfenced after the fenced copy.
    #[serde(default = "default_true")]
    pub duplicate_body: bool,
    /// File extensions (without the dot) picked up during discovery.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Files whose name contains any of these are skipped during discovery.
    #[serde(default = "default_exclude_substrings")]
    pub exclude_substrings: Vec<String>,
    /// Log filter used when `RUST_LOG` is unset (e.g. `info`, `fncat_core=debug`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            include_body: false,
            duplicate_body: true,
            extensions: default_extensions(),
            exclude_substrings: default_exclude_substrings(),
            log_level: None,
        }
    }
}

impl ExtractConfig {
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions { include_body: self.include_body, duplicate_body: self.duplicate_body }
    }

    /// Whether discovery should pick up a file with this name.
    pub fn accepts_file_name(&self, file_name: &str) -> bool {
        let has_extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| self.extensions.iter().any(|e| e == ext))
            .unwrap_or(false);
        has_extension && !self.exclude_substrings.iter().any(|s| file_name.contains(s.as_str()))
    }
}
