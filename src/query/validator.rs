//! Exact-word membership checks.

use crate::graph::{WordGraph, ENTRY_INDEX};

/// Membership test over the word graph.
///
/// A linear scan of each sibling list, descending into the matching node's
/// child list for every consumed letter. No ordering assumption is made
/// beyond "siblings are contiguous until the last-sibling flag".
pub struct Validator<'g> {
    graph: &'g WordGraph,
}

impl<'g> Validator<'g> {
    pub fn new(graph: &'g WordGraph) -> Self {
        Self { graph }
    }

    /// True if `word` is a complete word in the graph.
    ///
    /// Expects pre-normalized uppercase ASCII; the empty string is never a
    /// word, and a byte outside `A..=Z` simply never matches a node letter.
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.is_valid_from(ENTRY_INDEX, word)
    }

    /// Membership test starting from the sibling list at `start`.
    pub fn is_valid_from(&self, start: usize, word: &str) -> bool {
        if !self.graph.contains_index(start) {
            return false;
        }
        self.walk(start, word.as_bytes())
    }

    fn walk(&self, start: usize, word: &[u8]) -> bool {
        let Some((&first, rest)) = word.split_first() else {
            return false;
        };
        let mut index = start;
        loop {
            if self.graph.letter(index) == first {
                if rest.is_empty() {
                    return self.graph.is_end_of_word(index);
                }
                let child = self.graph.child(index);
                if child != 0 {
                    return self.walk(child, rest);
                }
                // Matched a leaf with letters left over; keep scanning so the
                // chain still terminates at the last-sibling flag.
            }
            if !self.graph.has_next_sibling(index) {
                return false;
            }
            index += 1;
        }
    }
}
