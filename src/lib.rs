// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use ngstore_domain::DirectoryDescriptor;
use ngstore_infra::LocalDirectoryQuery;
use ngstore_ports::directory::QueryOptions;
use ngstore_usecase::LoadDirectory;

pub mod app;
pub mod cli;
pub mod config;
pub mod presentation;

pub use config::{Config, OutputFormat, build_config};
pub use ngstore_domain::{EntryDescriptor, EntryOrder, value_objects::EntryType};
pub use ngstore_shared_kernel::{NgStoreError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Snapshot one local directory level.
pub fn load_directory(path: &Path, options: &QueryOptions) -> Result<DirectoryDescriptor> {
    let query = LocalDirectoryQuery::new();
    LoadDirectory::new(&query).run(path, options)
}
