#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod ordering;
pub mod value_objects;

pub use model::{DirectoryDescriptor, DirectoryDescriptorBuilder, EntryDescriptor};
pub use ordering::{EntryOrder, compare_entries};
