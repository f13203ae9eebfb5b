use serde::{Deserialize, Serialize};

use ngstore_shared_kernel::{
    DomainError, DomainResult,
    path::join_with_separator,
};

use super::EntryDescriptor;
use crate::ordering::EntryOrder;

/// Immutable snapshot of one directory: where it lives and what it contained at query time.
///
/// Entries keep the order the producer enumerated them in. A changed directory
/// is described by a new snapshot, never by updating this one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryDescriptor {
    parent_path: String,
    directory_name: String,
    entries: Vec<EntryDescriptor>,
}

impl DirectoryDescriptor {
    pub fn new(
        parent_path: impl Into<String>,
        directory_name: impl Into<String>,
        entries: Vec<EntryDescriptor>,
    ) -> Self {
        Self {
            parent_path: parent_path.into(),
            directory_name: directory_name.into(),
            entries,
        }
    }

    pub fn builder(parent_path: impl Into<String>, directory_name: impl Into<String>) -> DirectoryDescriptorBuilder {
        DirectoryDescriptorBuilder::new(parent_path, directory_name)
    }

    #[inline]
    pub fn parent_path(&self) -> &str {
        &self.parent_path
    }

    #[inline]
    pub fn directory_name(&self) -> &str {
        &self.directory_name
    }

    #[inline]
    pub fn entries(&self) -> &[EntryDescriptor] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Splits the snapshot into `(parent_path, directory_name, entries)`.
    pub fn into_parts(self) -> (String, String, Vec<EntryDescriptor>) {
        (self.parent_path, self.directory_name, self.entries)
    }

    /// Location of this directory built from the parent path and the directory name.
    pub fn path(&self) -> String {
        match (self.parent_path.is_empty(), self.directory_name.is_empty()) {
            (true, true) => String::new(),
            (true, false) => self.directory_name.clone(),
            _ => join_with_separator(&self.parent_path, &self.directory_name),
        }
    }

    /// Bounds-checked access to the entry at `index`.
    pub fn entry(&self, index: usize) -> DomainResult<&EntryDescriptor> {
        self.entries.get(index).ok_or(DomainError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    pub fn entry_path(&self, index: usize) -> DomainResult<String> {
        let entry = self.entry(index)?;
        Ok(join_with_separator(&self.path(), &entry.full_name()))
    }

    pub fn is_entry_directory(&self, index: usize) -> DomainResult<bool> {
        self.entry(index).map(EntryDescriptor::is_directory)
    }

    pub fn is_entry_file(&self, index: usize) -> DomainResult<bool> {
        self.entry(index).map(EntryDescriptor::is_file)
    }

    /// Paths of every entry, in entry order.
    pub fn entry_paths(&self) -> impl Iterator<Item = String> + '_ {
        let base = self.path();
        self.entries
            .iter()
            .map(move |entry| join_with_separator(&base, &entry.full_name()))
    }
}

/// Collects entries for a snapshot before it is frozen into a [`DirectoryDescriptor`].
#[derive(Debug, Clone)]
pub struct DirectoryDescriptorBuilder {
    parent_path: String,
    directory_name: String,
    entries: Vec<EntryDescriptor>,
    order: EntryOrder,
}

impl DirectoryDescriptorBuilder {
    pub fn new(parent_path: impl Into<String>, directory_name: impl Into<String>) -> Self {
        Self {
            parent_path: parent_path.into(),
            directory_name: directory_name.into(),
            entries: Vec::new(),
            order: EntryOrder::Unsorted,
        }
    }

    pub fn entry(mut self, entry: EntryDescriptor) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = EntryDescriptor>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn order(mut self, order: EntryOrder) -> Self {
        self.order = order;
        self
    }

    pub fn build(self) -> DirectoryDescriptor {
        let mut entries = self.entries;
        self.order.apply(&mut entries);
        DirectoryDescriptor::new(self.parent_path, self.directory_name, entries)
    }
}
