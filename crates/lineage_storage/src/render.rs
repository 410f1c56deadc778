//! Recursive ASCII tree rendering.

use std::fmt::Write;

use crate::tree::FamilyTree;

impl FamilyTree {
    /// Renders the tree rooted at `root` as ASCII art with generation
    /// labels and branch connectors.
    ///
    /// The root prints as generation 1 with no branch glyph; each child line
    /// is prefixed by an indentation string that grows three columns per
    /// depth level (`"   "` below a last sibling, `"|  "` otherwise) and a
    /// glyph distinguishing the last sibling (`\---`) from the rest
    /// (`|---`). An out-of-range root produces a single diagnostic line and
    /// no entity lines.
    ///
    /// Depth is bounded by generation count, which is small by domain
    /// nature, so plain recursion is fine here.
    #[must_use]
    pub fn render(&self, root: usize) -> String {
        let mut out = String::new();
        if root >= self.len() {
            let _ = writeln!(out, "[invalid root index: {root}]");
            return out;
        }
        self.render_person(&mut out, root, "", true, 1);
        out
    }

    /// Prints one person and recurses into its children in list order.
    fn render_person(&self, out: &mut String, index: usize, prefix: &str, last: bool, generation: usize) {
        let Ok(person) = self.get(index) else {
            // Dangling child index: drop the subtree, render the rest.
            return;
        };

        out.push_str(prefix);
        if !prefix.is_empty() {
            out.push_str(if last { "\\---" } else { "|---" });
        }
        let _ = writeln!(out, " [Gen {generation}] {person}");

        let children = person.children();
        if !children.is_empty() {
            let child_prefix = format!("{prefix}{}", if last { "   " } else { "|  " });
            for (i, &child) in children.iter().enumerate() {
                let child_is_last = i == children.len() - 1;
                self.render_person(out, child, &child_prefix, child_is_last, generation + 1);
            }
        }
    }
}
