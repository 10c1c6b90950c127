use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use fncat_core::ExtractConfig;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub include_body: bool,
    pub no_duplicate_body: bool,
    pub log_level: Option<String>,
}

/// Load an extraction config from JSON or YAML, chosen by file extension.
pub fn load_config_file(path: &Path) -> Result<ExtractConfig> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    match ext {
        "json" => serde_json::from_str(&body).context("Failed to parse config JSON"),
        "yaml" | "yml" => serde_yaml::from_str(&body).context("Failed to parse config YAML"),
        other => Err(anyhow!("Unsupported config format '{}': use .json, .yaml or .yml", other)),
    }
}

/// Resolve the effective config: file (if any), then command-line overrides.
pub fn resolve_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<ExtractConfig> {
    let mut config = match path {
        Some(p) => load_config_file(p)?,
        None => ExtractConfig::default(),
    };
    if overrides.include_body {
        config.include_body = true;
    }
    if overrides.no_duplicate_body {
        config.duplicate_body = false;
    }
    if overrides.log_level.is_some() {
        config.log_level = overrides.log_level.clone();
    }
    Ok(config)
}
