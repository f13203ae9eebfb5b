// crates/ports/src/directory.rs
use std::path::Path;

use ngstore_domain::{DirectoryDescriptor, EntryDescriptor, EntryOrder};
use ngstore_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Parameters the store receives with a directory query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    pub include_hidden: bool,
    pub follow_links: bool,
    pub exclude_patterns: Vec<String>,
    pub order: EntryOrder,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            include_hidden: true,
            follow_links: true,
            exclude_patterns: Vec::new(),
            order: EntryOrder::DirectoriesFirst,
        }
    }
}

/// One entry as the store hands it over. `entry_type` is the raw flag value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntryDto {
    pub base_name: String,
    pub extension: String,
    pub entry_type: u32,
}

/// Directory listing as the store hands it over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryListingDto {
    pub parent_path: String,
    pub directory_name: String,
    pub entries: Vec<DirectoryEntryDto>,
}

impl From<EntryDescriptor> for DirectoryEntryDto {
    fn from(entry: EntryDescriptor) -> Self {
        let (base_name, extension, entry_type) = entry.into_parts();
        Self { base_name, extension, entry_type: entry_type.bits() }
    }
}

impl From<DirectoryDescriptor> for DirectoryListingDto {
    fn from(descriptor: DirectoryDescriptor) -> Self {
        let (parent_path, directory_name, entries) = descriptor.into_parts();
        Self {
            parent_path,
            directory_name,
            entries: entries.into_iter().map(DirectoryEntryDto::from).collect(),
        }
    }
}

/// Port for querying the contents of one directory.
pub trait DirectoryQuery: Send + Sync {
    fn query(&self, path: &Path, options: &QueryOptions) -> Result<DirectoryListingDto>;
}
