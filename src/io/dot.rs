use crate::algorithm::ShortestPathResult;
use crate::graph::Graph;

/// Renders the found route as a Graphviz digraph, one line per hop.
///
/// The predecessor chain is walked from `target` back to the source, so the
/// final hop is printed first. Each hop is labeled with the delay of its
/// link, recovered as the difference between consecutive distances. A
/// trivial route (`target` is the source) renders an empty digraph.
///
/// Callers are expected to check that a route was found; a `target` without
/// a predecessor also renders an empty digraph.
pub fn render_route(graph: &Graph, result: &ShortestPathResult, target: usize) -> String {
    let mut out = String::from("digraph {\n");

    let mut current = target;
    while current != result.source {
        let prev = match result.predecessors[current] {
            Some(handle) => handle,
            None => break,
        };
        let delay = result.distances[current] - result.distances[prev];
        out.push_str(&format!(
            "\t{} -> {} [label={}];\n",
            graph.node_id(prev),
            graph.node_id(current),
            delay
        ));
        current = prev;
    }

    out.push_str("}\n");
    out
}
