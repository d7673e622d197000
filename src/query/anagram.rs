//! Anagram search over a letter bank with wildcards.

use crate::graph::{WordGraph, ENTRY_INDEX};

use super::WILDCARD;

const ALPHABET_SIZE: usize = 26;

/// A multiset of available letters plus a count of wildcards.
///
/// Scoped to one anagram call. The search consumes letters on the way down
/// and restores them on the way back up; sibling branches never observe each
/// other's consumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBank {
    counts: [u8; ALPHABET_SIZE],
    wildcards: u8,
}

impl LetterBank {
    /// Parse a bank from uppercase ASCII letters and `?` wildcards.
    ///
    /// Returns `None` for any other byte, or if a single letter repeats more
    /// than 255 times.
    pub fn parse(bank: &str) -> Option<Self> {
        let mut counts = [0u8; ALPHABET_SIZE];
        let mut wildcards = 0u8;
        for byte in bank.bytes() {
            if byte == WILDCARD {
                wildcards = wildcards.checked_add(1)?;
            } else if byte.is_ascii_uppercase() {
                let slot = &mut counts[(byte - b'A') as usize];
                *slot = slot.checked_add(1)?;
            } else {
                return None;
            }
        }
        Some(Self { counts, wildcards })
    }

    /// Total units (letters plus wildcards) remaining.
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum::<usize>() + self.wildcards as usize
    }

    pub fn is_empty(&self) -> bool {
        self.wildcards == 0 && self.counts.iter().all(|&c| c == 0)
    }

    /// Consume one occurrence of `letter` if present.
    fn take(&mut self, letter: u8) -> bool {
        let slot = &mut self.counts[(letter - b'A') as usize];
        if *slot > 0 {
            *slot -= 1;
            true
        } else {
            false
        }
    }

    /// Return one occurrence of `letter`.
    fn put(&mut self, letter: u8) {
        self.counts[(letter - b'A') as usize] += 1;
    }

    /// Consume one wildcard if available.
    fn take_wildcard(&mut self) -> bool {
        if self.wildcards > 0 {
            self.wildcards -= 1;
            true
        } else {
            false
        }
    }

    /// Return one wildcard.
    fn put_wildcard(&mut self) {
        self.wildcards += 1;
    }
}

/// How a node's letter was paid for out of the bank.
enum Consumed {
    Literal,
    Wildcard,
}

/// Backtracking anagram search.
///
/// Finds every word in the graph assemblable from a sub-multiset of the bank,
/// of any length from 1 up to the bank's size. Each `?` in the bank stands in
/// for any single letter; a node's letter is paid for with a literal when the
/// bank holds one and with a wildcard only otherwise, so a given word is
/// reached along exactly one path and never reported twice.
pub struct Anagrammer<'g> {
    graph: &'g WordGraph,
}

impl<'g> Anagrammer<'g> {
    pub fn new(graph: &'g WordGraph) -> Self {
        Self { graph }
    }

    /// All words formable from `bank` (uppercase letters and `?`).
    ///
    /// A bank containing an unsupported byte yields no results.
    pub fn anagram(&self, bank: &str) -> Vec<String> {
        match LetterBank::parse(bank) {
            Some(bank) => self.anagram_from(ENTRY_INDEX, &bank),
            None => Vec::new(),
        }
    }

    /// Anagram search starting from the sibling list at `start`.
    pub fn anagram_from(&self, start: usize, bank: &LetterBank) -> Vec<String> {
        if !self.graph.contains_index(start) || bank.is_empty() {
            return Vec::new();
        }
        let mut results = Vec::new();
        let mut working = bank.clone();
        let mut word = String::with_capacity(working.len());
        self.search(start, &mut working, &mut word, &mut results);
        debug_assert_eq!(working, *bank);
        results
    }

    fn search(
        &self,
        start: usize,
        bank: &mut LetterBank,
        word: &mut String,
        results: &mut Vec<String>,
    ) {
        let mut index = start;
        loop {
            #[cfg(debug_assertions)]
            let snapshot = bank.clone();

            let letter = self.graph.letter(index);
            let consumed = if bank.take(letter) {
                Some(Consumed::Literal)
            } else if bank.take_wildcard() {
                Some(Consumed::Wildcard)
            } else {
                None
            };

            if let Some(source) = consumed {
                // The output word always carries the node's letter, whichever
                // bank unit paid for it.
                word.push(letter as char);
                if self.graph.is_end_of_word(index) {
                    results.push(word.clone());
                }
                let child = self.graph.child(index);
                if child != 0 && !bank.is_empty() {
                    self.search(child, bank, word, results);
                }
                word.pop();
                match source {
                    Consumed::Literal => bank.put(letter),
                    Consumed::Wildcard => bank.put_wildcard(),
                }
            }

            // The bank must return to its pre-sibling state before the next
            // sibling is tried.
            #[cfg(debug_assertions)]
            debug_assert_eq!(*bank, snapshot);

            if !self.graph.has_next_sibling(index) {
                return;
            }
            index += 1;
        }
    }
}
