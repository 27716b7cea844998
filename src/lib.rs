//! Minroute - minimum-delay routes over directed networks
//!
//! This library finds the cheapest route between two nodes of a directed
//! network whose links carry minimum transit delays, using Dijkstra's
//! algorithm over an indexed binary min-heap.
//!
//! The heap keeps a per-node back-reference to its current slot, so lowering
//! a node's tentative distance relocates it in O(log n) instead of scanning
//! the queue. Networks are addressed through dense integer handles handed
//! out at insertion; external ids resolve to handles through a lazily sorted
//! lookup array.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;

pub use algorithm::{dijkstra::shortest_paths, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::store::{Graph, NodeId};

/// Sentinel distance of a node with no known route from the source.
pub const INFINITY: u32 = u32::MAX;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown node id: {0}")]
    NodeNotFound(NodeId),

    #[error("Negative delay on edge from {0} to {1}: {2}")]
    NegativeDelay(NodeId, NodeId, i32),

    #[error("Invalid node handle: {0}")]
    InvalidVertex(usize),

    #[error("Node feed contains no records")]
    EmptyNodeList,

    #[error("Malformed record on line {0}: {1}")]
    MalformedRecord(usize, String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
