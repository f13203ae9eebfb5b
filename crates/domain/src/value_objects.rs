//! Value objects shared with the store boundary.

pub use ngstore_shared_kernel::value_objects::EntryType;
