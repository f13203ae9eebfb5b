//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: loads a directory snapshot through the store's query port
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::LoadDirectory;
