//! Person store, parent/child linkage, generation indexing, and tree
//! rendering for Lineage.
//!
//! This crate provides:
//! - [`Person`] - A single record with name, birth year, optional death year
//! - [`FamilyTree`] - Append-only, index-addressed store with fail-soft linkage
//! - [`FamilyTree::generations`] - BFS generation layering from a root
//! - [`FamilyTree::render`] - Recursive ASCII tree rendering
//! - [`royal_family`] - The default seed dataset

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod generation;
mod person;
mod render;
mod seed;
mod tree;

pub use person::Person;
pub use seed::royal_family;
pub use tree::FamilyTree;
