//! The append-only family tree store.

use lineage_foundation::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::person::Person;

/// An append-only, index-addressed collection of [`Person`] records with
/// parent→child linkage.
///
/// The store owns every person; links are plain index relations into the
/// same store, which keeps serialization trivial and sidesteps ownership
/// cycles entirely. Indices are dense and zero-based; no removal operation
/// exists, so an index handed out by [`add_person`] stays valid for the
/// lifetime of the store (until [`clear`], which only restore-to-default
/// uses before immediately repopulating).
///
/// [`add_person`]: FamilyTree::add_person
/// [`clear`]: FamilyTree::clear
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FamilyTree {
    people: Vec<Person>,
}

impl FamilyTree {
    /// Creates a new empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new person and returns its newly assigned index.
    ///
    /// Always succeeds; the store only grows.
    pub fn add_person(
        &mut self,
        name: impl Into<String>,
        birth_year: i32,
        death_year: Option<i32>,
    ) -> usize {
        self.people.push(Person::new(name, birth_year, death_year));
        self.people.len() - 1
    }

    /// Returns the person at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfRange`] when `index >= len()`.
    ///
    /// [`ErrorKind::OutOfRange`]: lineage_foundation::ErrorKind::OutOfRange
    pub fn get(&self, index: usize) -> Result<&Person> {
        self.people
            .get(index)
            .ok_or_else(|| Error::out_of_range(index, self.people.len()))
    }

    /// Returns the number of stored persons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Returns true if the store holds no persons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Empties the store.
    pub fn clear(&mut self) {
        self.people.clear();
    }

    /// Iterates over persons in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }

    /// Makes `child` a child of `parent`.
    ///
    /// Silently does nothing when either index is outside `[0, len)`. This
    /// fail-soft policy is deliberate: dangling indices in persisted data or
    /// programming slips must never crash the program, the link is simply
    /// dropped.
    pub fn connect(&mut self, parent: usize, child: usize) {
        if parent < self.people.len() && child < self.people.len() {
            self.people[parent].add_child(child);
        }
    }
}
