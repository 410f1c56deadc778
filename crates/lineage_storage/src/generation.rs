//! BFS generation indexing.
//!
//! Groups the persons reachable from a root into generation-numbered layers.
//! Layer `i` (0-based) corresponds to "Generation i+1" in display terms; the
//! mapping to 1-based labels belongs to the rendering/CLI side.

use std::collections::VecDeque;

use crate::tree::FamilyTree;

impl FamilyTree {
    /// Performs a breadth-first traversal from `root` and groups person
    /// indices by generation.
    ///
    /// The root is layer 0; a child discovered from a layer-`g` person lands
    /// in layer `g + 1`. A visited set prevents re-enqueueing, so a person
    /// reachable through two different parent chains (not expected in a
    /// forest, but possible given fail-soft linkage) appears only in the
    /// layer that discovers it first. Persons unreachable from the root,
    /// such as co-parents with no incoming edge, are simply absent.
    ///
    /// Returns an empty sequence when `root` is out of range. The result is
    /// recomputed fresh on every call; at family-tree scale there is nothing
    /// worth caching.
    #[must_use]
    pub fn generations(&self, root: usize) -> Vec<Vec<usize>> {
        let mut layers: Vec<Vec<usize>> = Vec::new();
        if root >= self.len() {
            return layers;
        }

        let mut visited = vec![false; self.len()];
        let mut queue = VecDeque::new();
        queue.push_back((root, 0usize));
        visited[root] = true;

        while let Some((current, generation)) = queue.pop_front() {
            if generation >= layers.len() {
                layers.resize(generation + 1, Vec::new());
            }
            layers[generation].push(current);

            // get() cannot fail here: current was bounds-checked on enqueue
            // and the store never shrinks.
            let Ok(person) = self.get(current) else {
                continue;
            };
            for &child in person.children() {
                if child < self.len() && !visited[child] {
                    visited[child] = true;
                    queue.push_back((child, generation + 1));
                }
            }
        }

        layers
    }
}
