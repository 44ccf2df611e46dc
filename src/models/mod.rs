//! Shared data models for the checklist, validation output, and statistics.

pub mod checklist;

pub use checklist::{Checklist, ChecklistEntry};

use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Kind of checklist entry, derived from its file name.
pub enum Category {
    Source,
    Config,
    Doc,
}

impl Category {
    /// Derive the category of a relative path.
    ///
    /// `.cpp`/`.h` files are source; `README*` and `.md` files are docs;
    /// everything else (e.g. `platformio.ini`) is configuration.
    pub fn of(path: &str) -> Category {
        let p = Path::new(path);
        let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
        let stem = p.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        match ext {
            "cpp" | "h" => Category::Source,
            "md" => Category::Doc,
            _ if stem.eq_ignore_ascii_case("readme") => Category::Doc,
            _ => Category::Config,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Source => "source",
            Category::Config => "config",
            Category::Doc => "doc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Existence result for one checklist entry.
pub struct ValidationRecord {
    pub entry: ChecklistEntry,
    pub exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Ordered validation records, one per checklist entry.
pub struct Validation {
    pub records: Vec<ValidationRecord>,
}

impl Validation {
    /// True iff every record exists.
    pub fn verdict(&self) -> bool {
        self.records.iter().all(|r| r.exists)
    }

    pub fn missing(&self) -> impl Iterator<Item = &ValidationRecord> {
        self.records.iter().filter(|r| !r.exists)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Aggregate line statistics over source entries.
pub struct ProjectStats {
    pub total_lines: u64,
    pub source_files: usize,
}
