use std::path::Path;

use log::debug;
use ngstore_domain::{DirectoryDescriptor, EntryDescriptor, value_objects::EntryType};
use ngstore_ports::directory::{DirectoryEntryDto, DirectoryListingDto, DirectoryQuery, QueryOptions};
use ngstore_shared_kernel::{ApplicationError, Result};

pub struct LoadDirectory<'a> {
    query: &'a dyn DirectoryQuery,
}

impl<'a> LoadDirectory<'a> {
    pub fn new(query: &'a dyn DirectoryQuery) -> Self {
        Self { query }
    }

    /// Queries the store and freezes the answer into a snapshot.
    ///
    /// Entries keep the order the store returned them in.
    pub fn run(&self, path: &Path, options: &QueryOptions) -> Result<DirectoryDescriptor> {
        let listing = self.query.query(path, options).map_err(|source| ApplicationError::DirectoryLoadFailed {
            path: path.to_path_buf(),
            reason: "directory query failed".to_string(),
            source: Some(Box::new(source)),
        })?;
        let descriptor = listing_to_domain(listing);
        debug!("loaded {} entries from '{}'", descriptor.len(), descriptor.path());
        Ok(descriptor)
    }
}

fn listing_to_domain(listing: DirectoryListingDto) -> DirectoryDescriptor {
    let entries = listing.entries.into_iter().map(port_to_domain_entry).collect();
    DirectoryDescriptor::new(listing.parent_path, listing.directory_name, entries)
}

fn port_to_domain_entry(entry: DirectoryEntryDto) -> EntryDescriptor {
    EntryDescriptor::new(entry.base_name, entry.extension, EntryType::from_bits(entry.entry_type))
}
