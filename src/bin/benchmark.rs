use std::time::{Duration, Instant};

use minroute::algorithm::shortest_paths;
use minroute::graph::generators::random_network;
use minroute::graph::{Graph, NodeId};
use minroute::INFINITY;

// Routes from the first to the last generated id and reports how much of
// the network was settled before the target came out of the queue.
fn benchmark_route(graph: &mut Graph, nodes: NodeId) -> Duration {
    let source = graph.lookup(1).expect("generator assigns id 1");
    let target = graph.lookup(nodes).expect("generator assigns the last id");

    let start = Instant::now();
    let result = shortest_paths(graph, source, target).expect("handles come from this graph");
    let duration = start.elapsed();

    let settled = result
        .distances
        .iter()
        .filter(|&&dist| dist != INFINITY)
        .count();
    match result.distance(target) {
        Some(dist) => println!(
            "  - route of delay {} found, {} nodes settled, in {:?}",
            dist, settled, duration
        ),
        None => println!("  - no route, {} nodes settled, in {:?}", settled, duration),
    }

    duration
}

fn main() {
    // Network sizes to test
    let network_sizes = vec![
        // Small networks
        1_000,
        10_000,
        // Medium networks
        50_000,
        100_000,
        // Large networks - if memory allows
        500_000,
    ];

    // Edge factor: average number of links per node
    let edge_factor = 4.0;
    let max_delay = 100;
    let seed = 42;

    println!("=====================================================");
    println!("Benchmark: minimum-delay routing");
    println!("Edge factor: {} links per node (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &network_sizes {
        println!("\nGenerating random network with {} nodes...", size);
        let mut graph = random_network(size, edge_factor, max_delay, seed);
        println!(
            "Network has {} nodes and {} links",
            graph.node_count(),
            graph.edge_count()
        );

        let duration = benchmark_route(&mut graph, size);
        results.push((size, duration));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15}", "Nodes", "Route (ms)");
    println!("-----------------------------");
    for (size, duration) in &results {
        println!("{:<10} | {:<15.2}", size, duration.as_secs_f64() * 1000.0);
    }
}
