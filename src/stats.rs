//! Line statistics over the source entries of a validated checklist.

use crate::error::{PreflightError, Result};
use crate::models::{Category, Checklist, ProjectStats, Validation};
use std::fs;
use std::path::Path;

/// Sum the line counts of every source record.
///
/// Only meaningful once `validation.verdict()` holds. `source_files` comes
/// from the checklist definition, not from a second look at the disk.
pub fn collect(root: &Path, checklist: &Checklist, validation: &Validation) -> Result<ProjectStats> {
    debug_assert!(validation.verdict(), "stats collected for an incomplete tree");
    let mut total_lines: u64 = 0;
    for rec in validation
        .records
        .iter()
        .filter(|r| r.entry.category == Category::Source)
    {
        let path = root.join(&rec.entry.path);
        let text =
            fs::read_to_string(&path).map_err(|source| PreflightError::Read { path, source })?;
        total_lines += count_lines(&text);
    }
    Ok(ProjectStats {
        total_lines,
        source_files: checklist.source_count(),
    })
}

/// Count text lines with universal newlines.
///
/// `\n`, `\r\n` and a lone `\r` each end a line; trailing text without a
/// terminator is one more line. An empty string has zero lines.
pub fn count_lines(text: &str) -> u64 {
    let bytes = text.as_bytes();
    let mut lines = 0u64;
    let mut i = 0;
    let mut pending = false;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines += 1;
                pending = false;
            }
            b'\r' => {
                lines += 1;
                pending = false;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            _ => pending = true,
        }
        i += 1;
    }
    if pending {
        lines += 1;
    }
    lines
}
