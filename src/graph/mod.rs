pub mod generators;
pub mod store;

pub use store::{Edge, Graph, NodeId};
