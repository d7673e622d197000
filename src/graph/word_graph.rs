//! The packed word graph and its loader.
//!
//! # Binary format
//!
//! All values are little-endian `u32`:
//!
//! ```text
//! [node_count]
//! [node_count × packed node]       (see the node module for the bit layout)
//! ```
//!
//! Slot 0 of the node array is the null sentinel and is never dereferenced;
//! slot 1 is the entry point for every traversal.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zerocopy::{little_endian as le, FromBytes};

use super::error::GraphError;
use super::node;

/// Index of the graph's entry sibling list.
pub const ENTRY_INDEX: usize = 1;

/// A read-only DAWG over uppercase ASCII words.
///
/// Loaded once from a packed buffer and immutable thereafter, so it may be
/// shared freely across threads (`&WordGraph` is `Send + Sync`). All query
/// structures borrow it and never mutate it.
#[derive(Debug, Clone)]
pub struct WordGraph {
    nodes: Vec<u32>,
}

impl WordGraph {
    /// Decode a graph from its serialized byte buffer.
    ///
    /// Validates the length prefix, alignment, and every child index, so
    /// traversals over the resulting graph never index out of bounds.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GraphError> {
        if bytes.len() < 4 {
            return Err(GraphError::BufferTooSmall {
                needed: 4,
                available: bytes.len(),
            });
        }
        if bytes.len() % 4 != 0 {
            return Err(GraphError::Misaligned(bytes.len()));
        }

        let words = <[le::U32]>::ref_from_bytes(bytes)
            .map_err(|_| GraphError::Misaligned(bytes.len()))?;
        let declared = words[0].get() as usize;
        let actual = words.len() - 1;
        if declared != actual {
            return Err(GraphError::NodeCountMismatch { declared, actual });
        }

        let nodes: Vec<u32> = words[1..].iter().map(|w| w.get()).collect();
        Self::from_nodes(nodes)
    }

    /// Build a graph from an already-decoded node array.
    ///
    /// Slot 0 must be the null sentinel. Used by the builder and by
    /// `from_bytes` after the buffer checks.
    pub fn from_nodes(nodes: Vec<u32>) -> Result<Self, GraphError> {
        if nodes.len() <= ENTRY_INDEX {
            return Err(GraphError::EmptyGraph);
        }
        for (index, &packed) in nodes.iter().enumerate().skip(ENTRY_INDEX) {
            let child = node::child(packed);
            if child >= nodes.len() {
                return Err(GraphError::ChildOutOfBounds {
                    index,
                    child,
                    count: nodes.len(),
                });
            }
            let byte = node::letter(packed);
            if !byte.is_ascii_uppercase() {
                return Err(GraphError::InvalidLetter { index, byte });
            }
        }
        // A sibling scan advances by adjacency, so the final node must carry
        // the last-sibling flag or a scan could run off the array.
        let last = nodes.len() - 1;
        if node::has_next_sibling(nodes[last]) {
            return Err(GraphError::UnterminatedSiblingList(last));
        }
        log::debug!("word graph decoded: {} nodes", nodes.len());
        Ok(Self { nodes })
    }

    /// Read and decode a graph from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> anyhow::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(&bytes)?)
    }

    /// Load a graph from a `.dat` file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let graph = Self::from_reader(File::open(path)?)?;
        log::info!("loaded word graph from {}: {} nodes", path.display(), graph.node_count());
        Ok(graph)
    }

    /// Number of slots in the node array, sentinel included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True if `index` names a real node (not the sentinel, not past the end).
    #[inline]
    pub fn contains_index(&self, index: usize) -> bool {
        index >= ENTRY_INDEX && index < self.nodes.len()
    }

    /// Letter stored at `index`.
    #[inline]
    pub fn letter(&self, index: usize) -> u8 {
        node::letter(self.nodes[index])
    }

    /// True if the path ending at `index` spells a complete word.
    #[inline]
    pub fn is_end_of_word(&self, index: usize) -> bool {
        node::is_end_of_word(self.nodes[index])
    }

    /// True if the sibling list continues at `index + 1`.
    #[inline]
    pub fn has_next_sibling(&self, index: usize) -> bool {
        node::has_next_sibling(self.nodes[index])
    }

    /// First node of the child list of `index`, or 0 for a leaf.
    #[inline]
    pub fn child(&self, index: usize) -> usize {
        node::child(self.nodes[index])
    }

    /// Iterate over the node indices of the sibling list starting at `start`.
    ///
    /// Empty if `start` is the sentinel or out of bounds.
    pub fn siblings(&self, start: usize) -> Siblings<'_> {
        Siblings {
            graph: self,
            next: self.contains_index(start).then_some(start),
        }
    }

    /// Serialize back to the on-disk byte format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(4 * (self.nodes.len() + 1));
        bytes.extend_from_slice(&(self.nodes.len() as u32).to_le_bytes());
        for &packed in &self.nodes {
            bytes.extend_from_slice(&packed.to_le_bytes());
        }
        bytes
    }
}

/// Iterator over the node indices of one sibling list.
pub struct Siblings<'g> {
    graph: &'g WordGraph,
    next: Option<usize>,
}

impl Iterator for Siblings<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        self.next = self.graph.has_next_sibling(index).then_some(index + 1);
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node::pack;

    fn buffer_for(nodes: &[u32]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&(nodes.len() as u32).to_le_bytes());
        for &n in nodes {
            bytes.extend_from_slice(&n.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_decode_roundtrip() {
        // sentinel, then a one-word graph: "AB"
        let nodes = vec![0, pack(b'A', false, true, 2), pack(b'B', true, true, 0)];
        let graph = WordGraph::from_bytes(&buffer_for(&nodes)).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.letter(1), b'A');
        assert!(!graph.is_end_of_word(1));
        assert_eq!(graph.child(1), 2);
        assert!(graph.is_end_of_word(2));
        assert_eq!(graph.child(2), 0);
        assert_eq!(graph.to_bytes(), buffer_for(&nodes));
    }

    #[test]
    fn test_truncated_buffer_rejected() {
        let nodes = vec![0, pack(b'A', true, true, 0)];
        let mut bytes = buffer_for(&nodes);
        bytes.truncate(bytes.len() - 4);
        match WordGraph::from_bytes(&bytes) {
            Err(GraphError::NodeCountMismatch { declared: 2, actual: 1 }) => {}
            other => panic!("expected NodeCountMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_misaligned_buffer_rejected() {
        let bytes = vec![1, 0, 0, 0, 0xFF];
        assert!(matches!(WordGraph::from_bytes(&bytes), Err(GraphError::Misaligned(5))));
    }

    #[test]
    fn test_short_buffer_rejected() {
        assert!(matches!(
            WordGraph::from_bytes(&[0, 0]),
            Err(GraphError::BufferTooSmall { available: 2, .. })
        ));
    }

    #[test]
    fn test_sentinel_only_graph_rejected() {
        let bytes = buffer_for(&[0]);
        assert!(matches!(WordGraph::from_bytes(&bytes), Err(GraphError::EmptyGraph)));
    }

    #[test]
    fn test_unterminated_sibling_list_rejected() {
        let nodes = vec![0, pack(b'A', true, false, 0)];
        assert!(matches!(
            WordGraph::from_bytes(&buffer_for(&nodes)),
            Err(GraphError::UnterminatedSiblingList(1))
        ));
    }

    #[test]
    fn test_siblings_iterator() {
        let nodes = vec![
            0,
            pack(b'A', false, false, 0),
            pack(b'B', false, false, 0),
            pack(b'C', false, true, 0),
        ];
        let graph = WordGraph::from_bytes(&buffer_for(&nodes)).unwrap();
        let letters: Vec<u8> = graph.siblings(1).map(|i| graph.letter(i)).collect();
        assert_eq!(letters, vec![b'A', b'B', b'C']);
        assert_eq!(graph.siblings(0).count(), 0);
        assert_eq!(graph.siblings(99).count(), 0);
    }

    #[test]
    fn test_dangling_child_rejected() {
        let nodes = vec![0, pack(b'A', true, true, 999)];
        assert!(matches!(
            WordGraph::from_bytes(&buffer_for(&nodes)),
            Err(GraphError::ChildOutOfBounds { index: 1, child: 999, .. })
        ));
    }
}
