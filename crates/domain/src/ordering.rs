// domain entry ordering
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::EntryDescriptor;

/// How a producer arranges entries before freezing a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryOrder {
    /// Directories before everything else, then by base name.
    #[default]
    DirectoriesFirst,
    /// Enumeration order as returned by the source.
    Unsorted,
}

impl EntryOrder {
    /// Orders `entries` in place. The sort is stable.
    pub fn apply(self, entries: &mut [EntryDescriptor]) {
        match self {
            Self::DirectoriesFirst => entries.sort_by(compare_entries),
            Self::Unsorted => {}
        }
    }
}

/// Directory-flagged entries first, then byte order of the base name, then of the extension.
pub fn compare_entries(a: &EntryDescriptor, b: &EntryDescriptor) -> Ordering {
    b.is_directory()
        .cmp(&a.is_directory())
        .then_with(|| a.base_name().as_bytes().cmp(b.base_name().as_bytes()))
        .then_with(|| a.extension().as_bytes().cmp(b.extension().as_bytes()))
}
