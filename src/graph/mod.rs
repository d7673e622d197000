//! The packed word graph (DAWG) and its loader/builder.
//!
//! - [`node`] - bit layout of the packed 32-bit node
//! - [`word_graph`] - the decoded, read-only graph and its byte-format loader
//! - [`builder`] - word list to packed-array construction
//! - [`error`] - load-time error taxonomy

pub mod builder;
pub mod error;
pub mod node;
pub mod word_graph;

pub use builder::{build_graph, GraphBuilder};
pub use error::GraphError;
pub use word_graph::{WordGraph, ENTRY_INDEX};
