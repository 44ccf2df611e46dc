//! CLI argument parsing via `clap`.

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "preflight",
    version,
    about = "Smart Walking Stick firmware preflight checker",
    long_about = "Preflight: verify that the firmware project files exist, report source line counts, and print build instructions.\n\nRun from the firmware project root. Exit codes: 0 all files present, 1 files missing, 2 I/O failure.",
    after_help = "Examples:\n  preflight\n  preflight --repo-root ../smart-stick --output json"
)]
/// Top-level CLI options. Every flag is optional.
pub struct Cli {
    #[arg(long, help = "Firmware project root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, value_enum, help = "Output mode: human|json (default: human)")]
    pub output: Option<OutputMode>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Style human output with ANSI colors")]
    pub color: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Print diagnostic notes to stderr")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
/// Report rendering mode.
pub enum OutputMode {
    #[default]
    Human,
    Json,
}
