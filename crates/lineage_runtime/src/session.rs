//! Session state owning the tree and its backing file.

use std::path::{Path, PathBuf};

use lineage_foundation::Result;
use lineage_storage::{FamilyTree, royal_family};

use crate::serialize;

/// Where the session's tree came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Loaded from the backing file.
    Loaded,
    /// Built from the default seed (file missing or unreadable).
    Seeded,
}

/// Session state for an interactive run: the tree, the path it persists
/// to, and the root used for generation indexing and rendering.
pub struct Session {
    tree: FamilyTree,
    path: PathBuf,
    root: usize,
    source: DataSource,
}

impl Session {
    /// Opens a session against the given backing file.
    ///
    /// Tries to load the file; if it is missing, unreadable, or malformed,
    /// falls back to the default seed. Opening never fails, the
    /// [`source`](Session::source) accessor reports which path was taken.
    #[must_use]
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let (tree, source) = match serialize::load_from_file(&path) {
            Ok(tree) => (tree, DataSource::Loaded),
            Err(_) => (royal_family(), DataSource::Seeded),
        };

        Self {
            tree,
            path,
            root: 0,
            source,
        }
    }

    /// Creates a session directly from a tree, persisting to the given path.
    #[must_use]
    pub fn with_tree<P: AsRef<Path>>(tree: FamilyTree, path: P) -> Self {
        Self {
            tree,
            path: path.as_ref().to_path_buf(),
            root: 0,
            source: DataSource::Seeded,
        }
    }

    /// Saves the current tree to the backing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        serialize::save_to_file(&self.tree, &self.path)
    }

    /// Replaces the current tree with the default seed.
    ///
    /// In-memory only: the backing file is untouched until [`save`](Session::save).
    pub fn reset_to_default(&mut self) {
        self.tree = royal_family();
        self.source = DataSource::Seeded;
    }

    /// Returns the tree.
    #[must_use]
    pub const fn tree(&self) -> &FamilyTree {
        &self.tree
    }

    /// Returns the tree mutably.
    pub fn tree_mut(&mut self) -> &mut FamilyTree {
        &mut self.tree
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the root index used for layering and rendering.
    #[must_use]
    pub const fn root(&self) -> usize {
        self.root
    }

    /// Returns where the tree came from.
    #[must_use]
    pub const fn source(&self) -> DataSource {
        self.source
    }
}
