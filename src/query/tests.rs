//! Scenario tests over a shared fixture graph.

use crate::graph::{build_graph, WordGraph};
use crate::query::{Anagrammer, HookFinder, PatternMatcher, Validator};

fn fixture() -> WordGraph {
    build_graph([
        "CAP", "CAPE", "CAPER", "CAPS", "APE", "APER", "RETINAS", "RETINA", "ANESTRI",
    ])
    .unwrap()
}

#[test]
fn test_validity() {
    let graph = fixture();
    let validator = Validator::new(&graph);
    assert!(validator.is_valid_word("CAPE"));
    assert!(!validator.is_valid_word("CAPX"));
}

#[test]
fn test_hooks() {
    let graph = fixture();
    let hooks = HookFinder::new(&graph);
    assert_eq!(hooks.back_hooks("CAP"), vec!['E', 'S']);
    assert!(hooks.front_hooks("APE").contains(&'C'));
}

#[test]
fn test_internal_back_hooks() {
    let graph = fixture();
    let hooks = HookFinder::new(&graph);
    assert!(hooks.has_internal_back_hook("CAPE")); // CAP is valid
    assert!(!hooks.has_internal_back_hook("CAP")); // CA is not
}

#[test]
fn test_anagram_multiset_equality() {
    let graph = fixture();
    let anagrammer = Anagrammer::new(&graph);
    let words = anagrammer.anagram("RETINAS");
    assert!(words.contains(&"RETINAS".to_string()));
    assert!(words.contains(&"RETINA".to_string()));
    // ANESTRI shares RETINAS's exact multiset, so it is formable too.
    assert!(words.contains(&"ANESTRI".to_string()));
    // No word may use letters outside the bank's multiset.
    for word in &words {
        let mut remaining: Vec<u8> = b"RETINAS".to_vec();
        for byte in word.bytes() {
            let at = remaining
                .iter()
                .position(|&r| r == byte)
                .unwrap_or_else(|| panic!("{} uses a letter not in the bank", word));
            remaining.swap_remove(at);
        }
    }
}

#[test]
fn test_pattern_wildcard() {
    let graph = fixture();
    let matcher = PatternMatcher::new(&graph);
    assert_eq!(matcher.find_pattern("CAP?"), vec!["CAPE", "CAPS"]);
}

#[test]
fn test_queries_share_one_graph() {
    // All query structures borrow the same immutable graph; interleaved use
    // must not interfere.
    let graph = fixture();
    let validator = Validator::new(&graph);
    let matcher = PatternMatcher::new(&graph);
    let anagrammer = Anagrammer::new(&graph);
    let hooks = HookFinder::new(&graph);

    assert!(validator.is_valid_word("APER"));
    assert_eq!(matcher.find_pattern("APE?"), vec!["APER"]);
    assert!(anagrammer.anagram("PEA?").contains(&"APER".to_string()));
    assert_eq!(hooks.back_hooks("APE"), vec!['R']);
    assert!(validator.is_valid_word("APER"));
}

#[test]
fn test_graph_is_shareable_across_threads() {
    let graph = std::sync::Arc::new(fixture());
    let mut handles = Vec::new();
    for _ in 0..4 {
        let graph = std::sync::Arc::clone(&graph);
        handles.push(std::thread::spawn(move || {
            let validator = Validator::new(&graph);
            assert!(validator.is_valid_word("RETINAS"));
            Anagrammer::new(&graph).anagram("CAPER").len()
        }));
    }
    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(counts.windows(2).all(|w| w[0] == w[1]));
}
