//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`directory`]: the store's directory query, which produces listing snapshots
//!
//! The store library is an external collaborator; the domain and application
//! layers only ever see it through these traits and DTOs.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod directory;
