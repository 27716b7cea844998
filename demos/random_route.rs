use colored::*;

use minroute::graph::generators::random_network;
use minroute::shortest_paths;

fn main() {
    let nodes = 200;
    let mut network = random_network(nodes, 3.0, 50, 7);

    println!("{}", "Random network routing".bright_cyan().bold());
    println!(
        "Network has {} nodes and {} links",
        network.node_count(),
        network.edge_count()
    );

    let source = network.lookup(1).unwrap();
    let target = network.lookup(nodes).unwrap();
    let result = shortest_paths(&network, source, target).unwrap();

    match result.path_to(target) {
        Some(path) => {
            println!(
                "\n{} total delay {}",
                "Route found:".bright_green().bold(),
                result.distance(target).unwrap().to_string().bright_white()
            );
            for pair in path.windows(2) {
                let hop_delay = result.distances[pair[1]] - result.distances[pair[0]];
                println!(
                    "  {} -> {} (delay {})",
                    network.node_id(pair[0]).to_string().bright_yellow(),
                    network.node_id(pair[1]).to_string().bright_yellow(),
                    hop_delay
                );
            }
        }
        None => println!("\n{}", "No route between 1 and 200".bright_red().bold()),
    }
}
