// crates/shared-kernel/src/value_objects/mod.rs
pub mod entry_type;

pub use entry_type::EntryType;
