use log::debug;

use crate::data_structures::NodeHeap;
use crate::graph::Graph;
use crate::{Error, Result, INFINITY};

/// Result of a route computation
#[derive(Debug, Clone)]
pub struct ShortestPathResult {
    /// Distance from the source per node handle, `INFINITY` where unreached
    pub distances: Vec<u32>,

    /// Predecessor handles in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Handle the traversal started from
    pub source: usize,
}

impl ShortestPathResult {
    /// Distance from the source to `handle`, or `None` if no route was found
    pub fn distance(&self, handle: usize) -> Option<u32> {
        let dist = self.distances[handle];
        if dist == INFINITY {
            None
        } else {
            Some(dist)
        }
    }

    /// Reconstructs the route from the source to `target` as a handle
    /// sequence starting at the source, or `None` if no route was found.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if target != self.source && self.predecessors[target].is_none() {
            return None;
        }

        // Build the route in reverse by walking the predecessor chain
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

/// Computes the minimum-delay route from `source` toward `target`, both
/// given as node handles of `graph`.
///
/// Runs Dijkstra's relaxation loop with two early exits: once the extracted
/// minimum still sits at `INFINITY` every remaining node is unreachable,
/// and once `target` itself comes out its distance and predecessor are
/// final, so the rest of the network is never explored. Distances saturate
/// at `INFINITY` instead of wrapping when delays accumulate past `u32`.
///
/// Callers are expected to handle `source == target` themselves; the
/// trivial route carries no edges and the result encodes no signal for it.
pub fn shortest_paths(graph: &Graph, source: usize, target: usize) -> Result<ShortestPathResult> {
    if source >= graph.node_count() {
        return Err(Error::InvalidVertex(source));
    }
    if target >= graph.node_count() {
        return Err(Error::InvalidVertex(target));
    }

    let mut heap = NodeHeap::from_graph(graph);
    heap.decrease_distance(source, 0, None);

    while let Some(current) = heap.extract_min() {
        let reached = heap.distance(current);
        if reached == INFINITY {
            // Only disconnected nodes remain
            debug!("queue drained after {} unreachable nodes", heap.len() + 1);
            break;
        }
        if current == target {
            break;
        }
        for edge in graph.outgoing(current) {
            // Delays are checked non-negative at insertion
            let alt = reached.saturating_add(edge.delay as u32);
            if alt < heap.distance(edge.target) {
                heap.decrease_distance(edge.target, alt, Some(current));
            }
        }
    }

    let (distances, predecessors) = heap.into_parts();
    Ok(ShortestPathResult {
        distances,
        predecessors,
        source,
    })
}
