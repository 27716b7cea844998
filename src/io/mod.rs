pub mod dot;
pub mod loader;

pub use dot::render_route;
pub use loader::{read_edges, read_nodes};
