//! Construction of packed word graphs from word lists.
//!
//! Production `.dat` files come from an offline graph compiler; this builder
//! covers test fixtures, demos, and the `build_dawg` binary. It lays a trie
//! out breadth-first so that every sibling list occupies a contiguous run of
//! the node array, which is the invariant the traversal code relies on.
//! Children are ordered alphabetically, so sibling order (and therefore
//! result order) is deterministic.

use std::collections::{BTreeMap, VecDeque};

use super::error::GraphError;
use super::node::{self, MAX_CHILD_INDEX};
use super::word_graph::WordGraph;

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<u8, usize>,
    end_of_word: bool,
}

/// Incremental builder for a [`WordGraph`].
#[derive(Debug)]
pub struct GraphBuilder {
    trie: Vec<TrieNode>,
    word_count: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            trie: vec![TrieNode::default()],
            word_count: 0,
        }
    }

    /// Add one uppercase ASCII word.
    ///
    /// Returns `false` (without modifying the trie) for the empty string or
    /// any word containing a byte outside `A..=Z`.
    pub fn add_word(&mut self, word: &str) -> bool {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_uppercase()) {
            return false;
        }
        let mut current = 0;
        for letter in word.bytes() {
            current = match self.trie[current].children.get(&letter) {
                Some(&next) => next,
                None => {
                    let next = self.trie.len();
                    self.trie.push(TrieNode::default());
                    self.trie[current].children.insert(letter, next);
                    next
                }
            };
        }
        if !self.trie[current].end_of_word {
            self.trie[current].end_of_word = true;
            self.word_count += 1;
        }
        true
    }

    /// Add every word from an iterator, logging any that are rejected.
    pub fn add_words<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref();
            if !self.add_word(word) {
                log::warn!("skipping word with unsupported characters: {:?}", word);
            }
        }
        self
    }

    /// Number of distinct words added so far.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Lay the trie out into the packed node array.
    ///
    /// Breadth-first placement: each trie node's children become one
    /// contiguous sibling run, and the parent's child index is patched once
    /// the run's position is known. The entry list (children of the trie
    /// root) lands at index 1.
    pub fn build(&self) -> Result<WordGraph, GraphError> {
        let mut nodes: Vec<u32> = vec![0];
        // (trie node, packed slot of the node pointing at its children)
        let mut queue: VecDeque<(usize, Option<usize>)> = VecDeque::new();
        queue.push_back((0, None));

        while let Some((trie_id, parent_slot)) = queue.pop_front() {
            let children = &self.trie[trie_id].children;
            if children.is_empty() {
                continue;
            }
            let start = nodes.len();
            if start > MAX_CHILD_INDEX {
                return Err(GraphError::TooManyNodes(start));
            }
            let last = children.len() - 1;
            for (position, (&letter, &child_id)) in children.iter().enumerate() {
                let slot = nodes.len();
                nodes.push(node::pack(
                    letter,
                    self.trie[child_id].end_of_word,
                    position == last,
                    0,
                ));
                queue.push_back((child_id, Some(slot)));
            }
            if let Some(slot) = parent_slot {
                nodes[slot] |= (start as u32) << node::CHILD_SHIFT;
            }
        }

        log::debug!(
            "built word graph: {} words, {} nodes",
            self.word_count,
            nodes.len()
        );
        WordGraph::from_nodes(nodes)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a graph from a word list in one call.
pub fn build_graph<I, S>(words: I) -> Result<WordGraph, GraphError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = GraphBuilder::new();
    builder.add_words(words);
    builder.build()
}
