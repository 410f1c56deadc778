//! The person record.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single individual in the family tree.
///
/// A person's identity is its position in the owning [`FamilyTree`]: a
/// stable, dense, zero-based index assigned at append time and never reused.
/// Children are stored as indices into the same tree, in insertion order,
/// which is also display order.
///
/// [`FamilyTree`]: crate::FamilyTree
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Person {
    name: String,
    birth_year: i32,
    /// `None` means alive or unknown (the persisted format writes `-1`).
    death_year: Option<i32>,
    children: Vec<usize>,
}

impl Person {
    /// Creates a new person with no children.
    #[must_use]
    pub fn new(name: impl Into<String>, birth_year: i32, death_year: Option<i32>) -> Self {
        Self {
            name: name.into(),
            birth_year,
            death_year,
            children: Vec::new(),
        }
    }

    /// Returns the person's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the birth year.
    #[must_use]
    pub const fn birth_year(&self) -> i32 {
        self.birth_year
    }

    /// Returns the death year, or `None` if alive/unknown.
    #[must_use]
    pub const fn death_year(&self) -> Option<i32> {
        self.death_year
    }

    /// Returns the child indices in insertion order.
    #[must_use]
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    /// Sets the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets the birth year.
    pub fn set_birth_year(&mut self, birth_year: i32) {
        self.birth_year = birth_year;
    }

    /// Sets the death year.
    pub fn set_death_year(&mut self, death_year: Option<i32>) {
        self.death_year = death_year;
    }

    /// Appends a child index.
    ///
    /// Duplicates are not detected; a doubled index will appear twice during
    /// traversal. Validity of the index against the owning tree is the
    /// tree's concern (see [`FamilyTree::connect`]).
    ///
    /// [`FamilyTree::connect`]: crate::FamilyTree::connect
    pub(crate) fn add_child(&mut self, child: usize) {
        self.children.push(child);
    }
}

impl fmt::Display for Person {
    /// Formats as `Name (b. YYYY)` or `Name (b. YYYY, d. YYYY)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (b. {}", self.name, self.birth_year)?;
        if let Some(death) = self.death_year {
            write!(f, ", d. {death}")?;
        }
        write!(f, ")")
    }
}
