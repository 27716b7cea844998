use minroute::data_structures::NodeHeap;
use minroute::graph::Graph;
use minroute::INFINITY;

// Test helper function to create a network with ids 1..=n and no links
fn create_network(n: u32) -> Graph {
    let mut graph = Graph::new();
    for id in 1..=n {
        graph.insert_node(id);
    }
    graph
}

// Test helper that checks the parent-child ordering of the live region
fn assert_heap_shape(heap: &NodeHeap) {
    let live = heap.live();
    for slot in 1..live.len() {
        let parent = (slot - 1) / 2;
        assert!(
            heap.distance(live[parent]) <= heap.distance(live[slot]),
            "slot {} sits below a larger parent",
            slot
        );
    }
}

// Test that a fresh heap holds every node at the sentinel distance
#[test]
fn test_from_graph_starts_at_infinity() {
    let graph = create_network(6);
    let heap = NodeHeap::from_graph(&graph);

    assert_eq!(heap.len(), 6);
    assert!(!heap.is_empty());
    for handle in heap.live() {
        assert_eq!(heap.distance(*handle), INFINITY);
        assert_eq!(heap.previous(*handle), None);
    }
}

// Test that the heap snapshots the graph's id-sorted order after lookups
#[test]
fn test_from_graph_snapshots_lookup_order() {
    let mut graph = Graph::new();
    graph.insert_node(30);
    graph.insert_node(10);
    graph.insert_node(20);
    graph.lookup(10);

    let heap = NodeHeap::from_graph(&graph);
    let ids: Vec<u32> = heap.live().iter().map(|&h| graph.node_id(h)).collect();
    assert_eq!(ids, vec![10, 20, 30], "heap should start in id order");
}

// Test that extraction returns nodes by increasing distance
#[test]
fn test_extract_min_orders_by_distance() {
    let mut graph = create_network(5);
    let handles: Vec<usize> = (1..=5).map(|id| graph.lookup(id).unwrap()).collect();

    let mut heap = NodeHeap::from_graph(&graph);
    heap.decrease_distance(handles[0], 40, None);
    heap.decrease_distance(handles[1], 10, Some(handles[0]));
    heap.decrease_distance(handles[2], 30, Some(handles[0]));
    heap.decrease_distance(handles[3], 20, Some(handles[1]));
    assert_heap_shape(&heap);

    assert_eq!(heap.extract_min(), Some(handles[1]), "10 comes out first");
    assert_eq!(heap.extract_min(), Some(handles[3]), "then 20");
    assert_eq!(heap.extract_min(), Some(handles[2]), "then 30");
    assert_eq!(heap.extract_min(), Some(handles[0]), "then 40");
    assert_eq!(
        heap.extract_min(),
        Some(handles[4]),
        "the untouched node drains last"
    );
    assert_eq!(heap.extract_min(), None, "a drained heap yields nothing");
    assert!(heap.is_empty());
}

// Test that extracted nodes leave the live region but keep their state
#[test]
fn test_extracted_nodes_keep_their_state() {
    let mut graph = create_network(3);
    let first = graph.lookup(1).unwrap();

    let mut heap = NodeHeap::from_graph(&graph);
    heap.decrease_distance(first, 0, None);

    let extracted = heap.extract_min().unwrap();
    assert_eq!(extracted, first);
    assert_eq!(heap.len(), 2);
    assert!(
        !heap.live().contains(&first),
        "extracted node should leave the live region"
    );
    assert_eq!(
        heap.distance(first),
        0,
        "state stays readable after extraction"
    );
}

// Test that lowering a distance moves the node ahead of larger ones
#[test]
fn test_decrease_distance_moves_node_to_root() {
    let mut graph = create_network(7);
    let handles: Vec<usize> = (1..=7).map(|id| graph.lookup(id).unwrap()).collect();

    let mut heap = NodeHeap::from_graph(&graph);
    for (step, &handle) in handles.iter().enumerate() {
        heap.decrease_distance(handle, 100 - step as u32, None);
        assert_heap_shape(&heap);
    }

    let last = handles[6];
    assert_eq!(heap.live()[0], last, "the smallest distance sits at the root");
    assert_eq!(heap.distance(last), 94);

    heap.decrease_distance(handles[0], 1, Some(last));
    assert_heap_shape(&heap);
    assert_eq!(heap.live()[0], handles[0], "the new minimum takes the root");
    assert_eq!(heap.previous(handles[0]), Some(last));
}

// Test that interleaved lowering and extraction keep the shape intact
#[test]
fn test_mixed_operations_keep_heap_shape() {
    let mut graph = create_network(10);
    let handles: Vec<usize> = (1..=10).map(|id| graph.lookup(id).unwrap()).collect();

    let mut heap = NodeHeap::from_graph(&graph);
    heap.decrease_distance(handles[4], 50, None);
    heap.decrease_distance(handles[2], 20, None);
    heap.decrease_distance(handles[8], 35, None);
    assert_heap_shape(&heap);

    assert_eq!(heap.extract_min(), Some(handles[2]));
    assert_heap_shape(&heap);

    heap.decrease_distance(handles[0], 10, Some(handles[2]));
    heap.decrease_distance(handles[8], 12, Some(handles[2]));
    assert_heap_shape(&heap);

    assert_eq!(heap.extract_min(), Some(handles[0]));
    assert_eq!(heap.extract_min(), Some(handles[8]));
    assert_heap_shape(&heap);
    assert_eq!(heap.len(), 7);
}

// Test that equal distances extract in a stable, repeatable order
#[test]
fn test_equal_distances_extract_deterministically() {
    let mut graph = create_network(3);
    let two = graph.lookup(2).unwrap();
    let three = graph.lookup(3).unwrap();

    let mut heap = NodeHeap::from_graph(&graph);
    heap.decrease_distance(two, 4, None);
    heap.decrease_distance(three, 4, None);

    assert_eq!(
        heap.extract_min(),
        Some(two),
        "the first node lowered to 4 comes out first"
    );
    assert_eq!(heap.extract_min(), Some(three));
}

// Test that raising a distance is refused
#[test]
#[should_panic(expected = "does not lower")]
fn test_decrease_distance_rejects_higher_value() {
    let graph = create_network(2);
    let mut heap = NodeHeap::from_graph(&graph);

    heap.decrease_distance(0, 5, None);
    heap.decrease_distance(0, 9, None);
}

// Test that re-submitting the current distance is refused as well
#[test]
#[should_panic(expected = "does not lower")]
fn test_decrease_distance_rejects_equal_value() {
    let graph = create_network(2);
    let mut heap = NodeHeap::from_graph(&graph);

    heap.decrease_distance(1, 5, None);
    heap.decrease_distance(1, 5, None);
}
