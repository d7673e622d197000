//! Fixed-length wildcard pattern search.

use crate::graph::{WordGraph, ENTRY_INDEX};

use super::WILDCARD;

/// Exhaustive wildcard-aware variant of the membership walk.
///
/// Unlike the validator, matching does not stop at the first hit: with a `?`
/// in the pattern several siblings can match the same position, and each
/// continues its own branch.
pub struct PatternMatcher<'g> {
    graph: &'g WordGraph,
}

impl<'g> PatternMatcher<'g> {
    pub fn new(graph: &'g WordGraph) -> Self {
        Self { graph }
    }

    /// All words matching `pattern`, where `?` matches any letter.
    ///
    /// Every result has exactly `pattern.len()` letters. Results come back in
    /// graph traversal order (sibling order, then depth). An empty pattern or
    /// one containing a byte outside `A..=Z` and `?` yields no results.
    pub fn find_pattern(&self, pattern: &str) -> Vec<String> {
        self.find_pattern_from(ENTRY_INDEX, pattern)
    }

    /// Pattern search starting from the sibling list at `start`.
    pub fn find_pattern_from(&self, start: usize, pattern: &str) -> Vec<String> {
        let pattern = pattern.as_bytes();
        let well_formed = !pattern.is_empty()
            && pattern.iter().all(|&b| b.is_ascii_uppercase() || b == WILDCARD);
        if !well_formed || !self.graph.contains_index(start) {
            return Vec::new();
        }
        let mut results = Vec::new();
        let mut current = String::with_capacity(pattern.len());
        self.search(start, pattern, 0, &mut current, &mut results);
        results
    }

    fn search(
        &self,
        start: usize,
        pattern: &[u8],
        position: usize,
        current: &mut String,
        results: &mut Vec<String>,
    ) {
        let mut index = start;
        loop {
            let letter = self.graph.letter(index);
            if pattern[position] == letter || pattern[position] == WILDCARD {
                current.push(letter as char);
                if position + 1 == pattern.len() {
                    if self.graph.is_end_of_word(index) {
                        results.push(current.clone());
                    }
                } else {
                    let child = self.graph.child(index);
                    if child != 0 {
                        self.search(child, pattern, position + 1, current, results);
                    }
                }
                current.pop();
            }
            if !self.graph.has_next_sibling(index) {
                return;
            }
            index += 1;
        }
    }
}
