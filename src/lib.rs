//! Lineage - Family tree explorer
//!
//! This crate re-exports all layers of the Lineage system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: lineage_runtime    — Menu loop, CLI, text persistence
//! Layer 1: lineage_storage    — Person store, linkage, generations, rendering
//! Layer 0: lineage_foundation — Core error types
//! ```

pub use lineage_foundation as foundation;
pub use lineage_runtime as runtime;
pub use lineage_storage as storage;
