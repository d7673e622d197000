//! Packed node format for the word graph.
//!
//! Each node is a single little-endian `u32` with four fields:
//!
//! ```text
//! bits 10..32   child index (0 = no children)
//! bit  9        end-of-word flag
//! bit  8        last-sibling flag (terminates the sibling list)
//! bits 0..8     letter (uppercase ASCII)
//! ```
//!
//! Sibling lists are contiguous: the node after `i` is `i + 1` unless the
//! last-sibling flag is set. Index 0 is the null sentinel; index 1 is the
//! graph's entry point.

/// Number of bits the child index is shifted left by.
pub const CHILD_SHIFT: u32 = 10;

/// Mask selecting the end-of-word flag.
pub const END_OF_WORD_MASK: u32 = 0x0000_0200;

/// Mask selecting the last-sibling flag.
pub const LAST_SIBLING_MASK: u32 = 0x0000_0100;

/// Mask selecting the letter byte.
pub const LETTER_MASK: u32 = 0x0000_00FF;

/// Maximum child index representable in the packed format (22 bits).
pub const MAX_CHILD_INDEX: usize = (u32::MAX >> CHILD_SHIFT) as usize;

/// Extract the letter byte from a packed node.
#[inline]
pub fn letter(node: u32) -> u8 {
    (node & LETTER_MASK) as u8
}

/// True if the path ending at this node spells a complete word.
#[inline]
pub fn is_end_of_word(node: u32) -> bool {
    node & END_OF_WORD_MASK != 0
}

/// True if the sibling list continues at the next array index.
#[inline]
pub fn has_next_sibling(node: u32) -> bool {
    node & LAST_SIBLING_MASK == 0
}

/// Index of the first node of this node's child list, or 0 for none.
#[inline]
pub fn child(node: u32) -> usize {
    (node >> CHILD_SHIFT) as usize
}

/// Pack the four node fields into a single `u32`.
///
/// Used by the builder; query code only ever unpacks.
#[inline]
pub fn pack(letter: u8, end_of_word: bool, last_sibling: bool, child: usize) -> u32 {
    debug_assert!(child <= MAX_CHILD_INDEX);
    let mut node = (child as u32) << CHILD_SHIFT | letter as u32;
    if end_of_word {
        node |= END_OF_WORD_MASK;
    }
    if last_sibling {
        node |= LAST_SIBLING_MASK;
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack_roundtrip() {
        let node = pack(b'Q', true, false, 1234);
        assert_eq!(letter(node), b'Q');
        assert!(is_end_of_word(node));
        assert!(has_next_sibling(node));
        assert_eq!(child(node), 1234);

        let node = pack(b'A', false, true, 0);
        assert_eq!(letter(node), b'A');
        assert!(!is_end_of_word(node));
        assert!(!has_next_sibling(node));
        assert_eq!(child(node), 0);
    }

    #[test]
    fn test_flag_bits_do_not_overlap() {
        assert_eq!(END_OF_WORD_MASK & LAST_SIBLING_MASK, 0);
        assert_eq!(END_OF_WORD_MASK & LETTER_MASK, 0);
        assert_eq!(LAST_SIBLING_MASK & LETTER_MASK, 0);
        assert_eq!((1u32 << CHILD_SHIFT) & (END_OF_WORD_MASK | LAST_SIBLING_MASK | LETTER_MASK), 0);
    }
}
