//! Effective settings resolution.
//!
//! Preflight reads no configuration file and no environment variables; the
//! effective settings come from CLI flags merged over defaults:
//! - `repo_root`: `.`
//! - `output`: `human`
//! - `color`: false
//! - `verbose`: false

use crate::cli::{Cli, OutputMode};
use std::path::PathBuf;

#[derive(Debug, Clone)]
/// Fully-resolved settings passed by reference into the runner.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: OutputMode,
    pub color: bool,
    pub verbose: bool,
}

impl Default for Effective {
    fn default() -> Self {
        Effective {
            repo_root: PathBuf::from("."),
            output: OutputMode::Human,
            color: false,
            verbose: false,
        }
    }
}

/// Resolve `Effective` by applying CLI flags over defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<OutputMode>,
    cli_color: bool,
    cli_verbose: bool,
) -> Effective {
    let defaults = Effective::default();
    let output = cli_output.unwrap_or(defaults.output);
    Effective {
        repo_root: cli_repo_root
            .map(PathBuf::from)
            .unwrap_or(defaults.repo_root),
        output,
        // Styling only applies to human output
        color: cli_color && output == OutputMode::Human,
        verbose: cli_verbose,
    }
}

impl From<&Cli> for Effective {
    fn from(cli: &Cli) -> Self {
        resolve_effective(cli.repo_root.as_deref(), cli.output, cli.color, cli.verbose)
    }
}
