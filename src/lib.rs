//! Preflight core library.
//!
//! This crate checks that a fixed set of firmware project files exists on
//! disk, counts the lines of the source files, and renders a report for the
//! operator before a hardware build is attempted.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Effective configuration resolution from flags and defaults.
//! - `models`: Checklist, validation records, and project statistics.
//! - `validate`: Existence checks over the checklist.
//! - `stats`: Line counting over source entries.
//! - `output`: Human/JSON renderers for the report.
//! - `runner`: Sequences validation, statistics, and rendering.
//! - `error`: Fatal error type shared by the passes.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod runner;
pub mod stats;
pub mod utils;
pub mod validate;
