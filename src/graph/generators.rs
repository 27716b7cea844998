use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::{Graph, NodeId};

/// Generates a random directed network with ids `1..=nodes` and roughly
/// `edge_factor * nodes` links carrying delays in `0..=max_delay`.
/// Self-loops are skipped. The same seed reproduces the same network.
pub fn random_network(nodes: NodeId, edge_factor: f64, max_delay: i32, seed: u64) -> Graph {
    assert!(nodes > 0, "nodes must be positive");
    assert!(max_delay >= 0, "max_delay must not be negative");

    let mut graph = Graph::with_capacity(nodes as usize);
    let mut rng = StdRng::seed_from_u64(seed);

    for id in 1..=nodes {
        graph.insert_node(id);
    }

    // Approximately edge_factor * n links
    let links = (edge_factor * nodes as f64) as usize;

    for _ in 0..links {
        let from = rng.gen_range(1..=nodes);
        let to = rng.gen_range(1..=nodes);
        if from != to {
            let delay = rng.gen_range(0..=max_delay);
            graph
                .insert_edge(from, to, delay)
                .expect("generated endpoints exist");
        }
    }

    graph
}

/// Generates a `width x height` grid network with unit delays on every
/// 4-connected link, ids assigned row-major starting at 1.
pub fn grid_network(width: NodeId, height: NodeId) -> Graph {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");

    let mut graph = Graph::with_capacity((width * height) as usize);

    // Helper to get the node id from grid coordinates
    let id_at = |x: NodeId, y: NodeId| -> NodeId { y * width + x + 1 };

    for y in 0..height {
        for x in 0..width {
            graph.insert_node(id_at(x, y));
        }
    }

    // Add links (4-connectivity)
    for y in 0..height {
        for x in 0..width {
            let current = id_at(x, y);
            let mut link = |to: NodeId| {
                graph
                    .insert_edge(current, to, 1)
                    .expect("grid endpoints exist");
            };

            if x > 0 {
                link(id_at(x - 1, y));
            }
            if x + 1 < width {
                link(id_at(x + 1, y));
            }
            if y > 0 {
                link(id_at(x, y - 1));
            }
            if y + 1 < height {
                link(id_at(x, y + 1));
            }
        }
    }

    graph
}
