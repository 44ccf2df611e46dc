//! Checklist schema: the ordered set of paths a firmware tree must contain.

use super::Category;
use serde::Serialize;

/// Required files of the Smart Walking Stick firmware, in report order.
const FIRMWARE_FILES: [&str; 13] = [
    "src/main.cpp",
    "src/pins.h",
    "src/config.h",
    "src/ble.h",
    "src/ble.cpp",
    "src/sensors.h",
    "src/sensors.cpp",
    "src/fall_detection.h",
    "src/fall_detection.cpp",
    "src/haptics.h",
    "src/haptics.cpp",
    "platformio.ini",
    "README.md",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A required relative path and the category derived from it.
pub struct ChecklistEntry {
    pub path: String,
    pub category: Category,
}

impl ChecklistEntry {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let category = Category::of(&path);
        ChecklistEntry { path, category }
    }
}

#[derive(Debug, Clone)]
/// Immutable, non-empty, ordered list of required entries.
pub struct Checklist {
    entries: Vec<ChecklistEntry>,
}

impl Checklist {
    /// Build a checklist from paths in declaration order.
    ///
    /// Returns `None` when `paths` is empty.
    pub fn new<I, S>(paths: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<ChecklistEntry> = paths.into_iter().map(ChecklistEntry::new).collect();
        if entries.is_empty() {
            return None;
        }
        Some(Checklist { entries })
    }

    /// The canonical checklist for the walking stick firmware project.
    pub fn firmware() -> Self {
        Checklist {
            entries: FIRMWARE_FILES.iter().map(|p| ChecklistEntry::new(*p)).collect(),
        }
    }

    pub fn entries(&self) -> &[ChecklistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed checklist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries categorized as source, counted from the definition.
    pub fn source_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.category == Category::Source)
            .count()
    }
}
