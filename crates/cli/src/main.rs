use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fncat::commands::{extract_command, list_files_command, resolve_config, ConfigOverrides};
use fncat::logging;

/// Function catalog extractor for Go source trees.
///
/// This CLI is a thin wrapper around `fncat-core` (exposed in code as `fncat_core`).
/// Parsing, rendering and aggregation live in the library; the CLI discovers
/// files, resolves configuration and writes the output artifacts.
#[derive(Parser, Debug)]
#[command(
    name = "fncat",
    version,
    about = "Extract a function catalog from a Go source tree",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract descriptions of every function under a project directory.
    ///
    /// Writes:
    /// - `all_function_descriptions.txt` with one report per source file.
    /// - `functions.json` and `test_functions.json` with function records.
    /// - `manifest.json` describing the run.
    Extract {
        /// Project directory to scan. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        project: String,

        /// Output directory (created if missing).
        #[arg(long, default_value = ".")]
        output: String,

        /// Include each function's source text in its description.
        #[arg(long)]
        include_body: bool,

        /// Emit the function body once instead of twice.
        #[arg(long)]
        no_duplicate_body: bool,

        /// Optional JSON or YAML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Log filter (e.g. `info`, `debug`). `RUST_LOG` takes precedence.
        #[arg(long)]
        log_level: Option<String>,
    },

    /// List the source files an extraction would process.
    ListFiles {
        /// Project directory to scan. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        project: String,

        /// Emit JSON instead of human-readable output.
        #[arg(long)]
        json: bool,

        /// Optional JSON or YAML config file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Extract {
            project,
            output,
            include_body,
            no_duplicate_body,
            config,
            log_level,
        } => {
            let overrides = ConfigOverrides { include_body, no_duplicate_body, log_level };
            let config = resolve_config(config.as_deref(), &overrides)?;
            logging::init(config.log_level.as_deref());
            extract_command(&project, &output, &config)?
        }
        Command::ListFiles { project, json, config } => {
            let config = resolve_config(config.as_deref(), &ConfigOverrides::default())?;
            logging::init(config.log_level.as_deref());
            list_files_command(&project, &config, json)?
        }
    }

    Ok(())
}
