use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::process::ExitCode;

use minroute::algorithm::shortest_paths;
use minroute::graph::{Graph, NodeId};
use minroute::io::{read_edges, read_nodes, render_route};

const USAGE: &str = "usage: minroute <node-file> <edge-file> <source-id> <dest-id> [output-file]";

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 5 || args.len() > 6 {
        eprintln!("{}", USAGE);
        return ExitCode::from(1);
    }
    let source_id: NodeId = match args[3].parse() {
        Ok(id) => id,
        Err(_) => {
            eprintln!("bad source id {:?}\n{}", args[3], USAGE);
            return ExitCode::from(1);
        }
    };
    let dest_id: NodeId = match args[4].parse() {
        Ok(id) => id,
        Err(_) => {
            eprintln!("bad destination id {:?}\n{}", args[4], USAGE);
            return ExitCode::from(1);
        }
    };

    // Load the network
    let mut graph = Graph::new();

    let nodes = match File::open(&args[1]) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("cannot open {}: {}", args[1], err);
            return ExitCode::from(3);
        }
    };
    if let Err(err) = read_nodes(&mut graph, BufReader::new(nodes)) {
        eprintln!("cannot load {}: {}", args[1], err);
        return ExitCode::from(4);
    }

    let edges = match File::open(&args[2]) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("cannot open {}: {}", args[2], err);
            return ExitCode::from(3);
        }
    };
    if let Err(err) = read_edges(&mut graph, BufReader::new(edges)) {
        eprintln!("cannot load {}: {}", args[2], err);
        return ExitCode::from(4);
    }

    // Resolve the endpoints
    let source = match graph.lookup(source_id) {
        Some(handle) => handle,
        None => {
            eprintln!("source node {} does not exist", source_id);
            return ExitCode::from(5);
        }
    };
    let target = match graph.lookup(dest_id) {
        Some(handle) => handle,
        None => {
            eprintln!("destination node {} does not exist", dest_id);
            return ExitCode::from(5);
        }
    };

    // Compute the route; a node is trivially routed to itself
    let dot = if source == target {
        String::from("digraph {\n}\n")
    } else {
        let result = match shortest_paths(&graph, source, target) {
            Ok(result) => result,
            Err(err) => {
                eprintln!("route computation failed: {}", err);
                return ExitCode::from(5);
            }
        };
        if result.distance(target).is_none() {
            eprintln!("no route from {} to {}", source_id, dest_id);
            return ExitCode::from(6);
        }
        render_route(&graph, &result, target)
    };

    // Emit the route
    if args.len() == 6 {
        if let Err(err) = fs::write(&args[5], &dot) {
            eprintln!("cannot write {}: {}", args[5], err);
            return ExitCode::from(7);
        }
    } else {
        print!("{}", dot);
    }

    ExitCode::SUCCESS
}
