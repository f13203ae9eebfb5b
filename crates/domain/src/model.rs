pub mod entities;

pub use entities::{DirectoryDescriptor, DirectoryDescriptorBuilder, EntryDescriptor};
