//! Query algorithms over the word graph.
//!
//! All four operate over one shared read-only [`WordGraph`](crate::graph::WordGraph)
//! and are created per query:
//!
//! - [`validator`] - exact-word membership
//! - [`pattern`] - fixed-length wildcard search
//! - [`anagram`] - letter-bank backtracking search
//! - [`hooks`] - front/back hook discovery
//!
//! Inputs are expected pre-normalized to uppercase ASCII (plus `?` where
//! wildcards apply); a query containing any other byte degrades to an empty
//! or `false` result rather than an error.

pub mod anagram;
pub mod hooks;
pub mod pattern;
pub mod validator;

#[cfg(test)]
mod tests;

/// The wildcard byte accepted in patterns and letter banks.
pub const WILDCARD: u8 = b'?';

pub use anagram::{Anagrammer, LetterBank};
pub use hooks::HookFinder;
pub use pattern::PatternMatcher;
pub use validator::Validator;
