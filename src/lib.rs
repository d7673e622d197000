//! Lexicon queries over a packed DAWG: word validity, wildcard pattern
//! matching, anagram generation, and hook discovery.

pub mod graph;
pub mod lexicon;
pub mod query;
pub mod render;

pub use graph::{GraphBuilder, GraphError, WordGraph, ENTRY_INDEX};
pub use lexicon::Lexicon;
pub use query::{Anagrammer, HookFinder, LetterBank, PatternMatcher, Validator};
pub use render::{render_hook_table, WordEntry};
