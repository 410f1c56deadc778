//! Text persistence codec, session state, and interactive menu for Lineage.
//!
//! This crate provides:
//! - [`serialize`] - The newline-delimited text codec and file save/load
//! - [`Session`] - Load-or-seed session state owning the tree
//! - [`Repl`] - The interactive menu loop
//! - The `lineage` CLI binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod editor;
mod repl;
mod session;
pub mod serialize;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::{DataSource, Session};
