//! Existence checks for every checklist entry.
//!
//! Every entry is checked even after a miss, so the report can list all
//! absent paths at once.

use crate::error::{PreflightError, Result};
use crate::models::{Checklist, Validation, ValidationRecord};
use std::io;
use std::path::Path;

/// Check each entry of `checklist` under `root`, preserving order.
///
/// "Not found" (including a parent component that is not a directory)
/// yields a record with `exists = false`; any other I/O error (e.g.
/// permission denied on a parent directory) is fatal.
pub fn validate(root: &Path, checklist: &Checklist) -> Result<Validation> {
    let mut records = Vec::with_capacity(checklist.len());
    for entry in checklist.entries() {
        let path = root.join(&entry.path);
        let exists = match path.try_exists() {
            Ok(found) => found,
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                false
            }
            Err(source) => return Err(PreflightError::Access { path, source }),
        };
        records.push(ValidationRecord {
            entry: entry.clone(),
            exists,
        });
    }
    Ok(Validation { records })
}
