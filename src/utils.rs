//! Supporting helpers for stderr diagnostics.

use owo_colors::OwoColorize;

pub fn error_prefix() -> String {
    "error:".red().bold().to_string()
}

pub fn note_prefix() -> String {
    "note:".yellow().bold().to_string()
}

pub fn info_prefix() -> String {
    "info:".blue().bold().to_string()
}
