//! Hook discovery: single letters that extend a word into another word.

use crate::graph::{WordGraph, ENTRY_INDEX};

use super::Validator;

/// Finds front/back hooks and tests for internal hooks.
///
/// A hook is a single letter that can be affixed to a valid word to form a
/// different valid word; an internal hook means the word stays valid after
/// dropping its own first or last letter.
pub struct HookFinder<'g> {
    graph: &'g WordGraph,
    validator: Validator<'g>,
}

impl<'g> HookFinder<'g> {
    pub fn new(graph: &'g WordGraph) -> Self {
        Self {
            graph,
            validator: Validator::new(graph),
        }
    }

    /// Letters `L` such that `word + L` is a valid word.
    ///
    /// Walks `word`'s exact letter path, then collects every end-of-word node
    /// in the terminal node's child list. If `word` is not on a path in the
    /// graph the result is empty. Duplicate-free, in graph sibling order.
    pub fn back_hooks(&self, word: &str) -> Vec<char> {
        let mut list = ENTRY_INDEX;
        for letter in word.bytes() {
            let Some(node) = self.find_sibling(list, letter) else {
                return Vec::new();
            };
            list = self.graph.child(node);
            if list == 0 {
                return Vec::new();
            }
        }
        self.graph
            .siblings(list)
            .filter(|&i| self.graph.is_end_of_word(i))
            .map(|i| self.graph.letter(i) as char)
            .collect()
    }

    /// Letters `L` such that `L + word` is a valid word.
    ///
    /// Scans the entry sibling list and tests `word` against each letter's
    /// subtree. Duplicate-free, in graph sibling order.
    pub fn front_hooks(&self, word: &str) -> Vec<char> {
        self.graph
            .siblings(ENTRY_INDEX)
            .filter(|&i| {
                let child = self.graph.child(i);
                child != 0 && self.validator.is_valid_from(child, word)
            })
            .map(|i| self.graph.letter(i) as char)
            .collect()
    }

    /// True if `word` minus its last letter is itself a valid word.
    ///
    /// False for words of one letter or fewer: the empty remainder is never a
    /// word.
    pub fn has_internal_back_hook(&self, word: &str) -> bool {
        if word.len() <= 1 || !word.is_ascii() {
            return false;
        }
        self.validator.is_valid_word(&word[..word.len() - 1])
    }

    /// True if `word` minus its first letter is itself a valid word.
    pub fn has_internal_front_hook(&self, word: &str) -> bool {
        if word.len() <= 1 || !word.is_ascii() {
            return false;
        }
        self.validator.is_valid_word(&word[1..])
    }

    /// Scan one sibling list for a node carrying `letter`.
    fn find_sibling(&self, list: usize, letter: u8) -> Option<usize> {
        self.graph
            .siblings(list)
            .find(|&i| self.graph.letter(i) == letter)
    }
}
