//! Result presentation: structured per-word reports and the HTML hook table.
//!
//! The query layer returns structured data only; everything textual lives
//! here.

pub mod html;

use serde::Serialize;

use crate::graph::WordGraph;
use crate::query::HookFinder;

pub use html::render_hook_table;

/// Hook report for one word: the row of the hook table.
#[derive(Debug, Clone, Serialize)]
pub struct WordEntry {
    pub word: String,
    pub front_hooks: Vec<char>,
    pub back_hooks: Vec<char>,
    pub has_internal_front_hook: bool,
    pub has_internal_back_hook: bool,
}

impl WordEntry {
    /// Compute the full hook report for `word`.
    pub fn for_word(graph: &WordGraph, word: &str) -> Self {
        let hooks = HookFinder::new(graph);
        Self {
            word: word.to_string(),
            front_hooks: hooks.front_hooks(word),
            back_hooks: hooks.back_hooks(word),
            has_internal_front_hook: hooks.has_internal_front_hook(word),
            has_internal_back_hook: hooks.has_internal_back_hook(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;

    #[test]
    fn test_word_entry() {
        let graph = build_graph(["CAP", "CAPE", "CAPS", "APE"]).unwrap();
        let entry = WordEntry::for_word(&graph, "CAP");
        assert_eq!(entry.word, "CAP");
        assert!(entry.front_hooks.is_empty());
        assert_eq!(entry.back_hooks, vec!['E', 'S']);
        assert!(!entry.has_internal_front_hook);
        assert!(!entry.has_internal_back_hook);

        let entry = WordEntry::for_word(&graph, "CAPE");
        assert!(entry.has_internal_front_hook); // APE
        assert!(entry.has_internal_back_hook); // CAP
    }

    #[test]
    fn test_word_entry_serializes() {
        let graph = build_graph(["APE", "CAPE"]).unwrap();
        let entry = WordEntry::for_word(&graph, "APE");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"word\":\"APE\""));
        assert!(json.contains("\"front_hooks\":[\"C\"]"));
    }
}
