//! Facade owning the word graph and dispatching queries against it.

use std::path::Path;

use crate::graph::{build_graph, GraphError, WordGraph};
use crate::query::{Anagrammer, HookFinder, PatternMatcher, Validator};

/// A loaded lexicon: one immutable [`WordGraph`] plus per-query entry points.
///
/// Query structures are transient; each call constructs one over a borrow of
/// the graph and drops it with the result.
pub struct Lexicon {
    graph: WordGraph,
}

impl Lexicon {
    pub fn new(graph: WordGraph) -> Self {
        Self { graph }
    }

    /// Load a lexicon from a packed `.dat` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self::new(WordGraph::from_file(path)?))
    }

    /// Build a lexicon directly from a word list.
    pub fn from_words<I, S>(words: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(build_graph(words)?))
    }

    pub fn graph(&self) -> &WordGraph {
        &self.graph
    }

    pub fn is_valid_word(&self, word: &str) -> bool {
        Validator::new(&self.graph).is_valid_word(word)
    }

    pub fn find_pattern(&self, pattern: &str) -> Vec<String> {
        PatternMatcher::new(&self.graph).find_pattern(pattern)
    }

    pub fn anagram(&self, bank: &str) -> Vec<String> {
        Anagrammer::new(&self.graph).anagram(bank)
    }

    pub fn hooks(&self) -> HookFinder<'_> {
        HookFinder::new(&self.graph)
    }
}
