pub mod directory_descriptor;
pub mod entry_descriptor;

pub use directory_descriptor::{DirectoryDescriptor, DirectoryDescriptorBuilder};
pub use entry_descriptor::EntryDescriptor;
