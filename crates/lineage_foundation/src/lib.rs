//! Error types and shared definitions for Lineage.
//!
//! This crate provides:
//! - [`Error`] - The error type shared by all layers
//! - [`ErrorKind`] - Categorized error kinds for pattern matching
//! - [`Result`] - Convenience alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;

pub use error::{Error, ErrorKind, Result};
