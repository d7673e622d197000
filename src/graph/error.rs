//! Errors reported while loading a serialized word graph.

use thiserror::Error;

/// Errors that can occur when decoding a packed word-graph buffer.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("Buffer length {0} is not a multiple of 4 bytes")]
    Misaligned(usize),

    #[error("Declared node count {declared} does not match payload of {actual} nodes")]
    NodeCountMismatch { declared: usize, actual: usize },

    #[error("Graph contains no nodes beyond the null sentinel")]
    EmptyGraph,

    #[error("Node {index} has child index {child} out of bounds (node count {count})")]
    ChildOutOfBounds { index: usize, child: usize, count: usize },

    #[error("Too many nodes: {0} (child indices are 22-bit)")]
    TooManyNodes(usize),

    #[error("Final node {0} does not terminate its sibling list")]
    UnterminatedSiblingList(usize),

    #[error("Node {index} carries letter byte 0x{byte:02X} outside A..=Z")]
    InvalidLetter { index: usize, byte: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_error_display() {
        let err = GraphError::BufferTooSmall { needed: 40, available: 12 };
        assert!(err.to_string().contains("40"));
        assert!(err.to_string().contains("12"));

        let err = GraphError::NodeCountMismatch { declared: 100, actual: 7 };
        assert!(err.to_string().contains("100"));
        assert!(err.to_string().contains("7"));
    }
}
