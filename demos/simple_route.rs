use minroute::graph::Graph;
use minroute::io::render_route;
use minroute::shortest_paths;

fn main() {
    // Create a simple network
    let mut network = Graph::new();

    // Add nodes with ids 10-50
    for id in [10, 20, 30, 40, 50] {
        network.insert_node(id);
    }

    // Add links with delays
    let links = [
        (10, 20, 10),
        (10, 30, 5),
        (20, 40, 1),
        (30, 20, 3),
        (30, 40, 9),
        (30, 50, 2),
        (40, 50, 4),
        (50, 10, 7),
        (50, 40, 6),
    ];
    for (from, to, delay) in links {
        network.insert_edge(from, to, delay).unwrap();
    }

    println!("--- Routing on a simple network ---");
    println!(
        "Network has {} nodes and {} links",
        network.node_count(),
        network.edge_count()
    );

    let source = network.lookup(10).unwrap();

    for dest in [40, 50] {
        let target = network.lookup(dest).unwrap();
        let result = shortest_paths(&network, source, target).unwrap();

        match result.path_to(target) {
            Some(path) => {
                let ids: Vec<u32> = path.iter().map(|&handle| network.node_id(handle)).collect();
                println!(
                    "\nRoute 10 -> {}: delay = {}, via {:?}",
                    dest,
                    result.distance(target).unwrap(),
                    ids
                );
                print!("{}", render_route(&network, &result, target));
            }
            None => println!("\nRoute 10 -> {}: unreachable", dest),
        }
    }
}
