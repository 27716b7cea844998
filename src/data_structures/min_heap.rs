use crate::graph::Graph;
use crate::INFINITY;

/// An indexed binary min-heap over a graph's node handles, keyed by
/// tentative distance.
///
/// The heap array holds handles and three side tables carry the traversal
/// state per handle: tentative distance, predecessor on the best route so
/// far, and the handle's current slot in the array. Every swap refreshes
/// the slot table, which is what makes `decrease_distance` O(log n): the
/// node is found in O(1) and only bubbles up from where it already sits.
///
/// Extraction never shrinks the array. The live heap occupies `data[..len]`
/// and extracted handles park in the slots behind it, so the allocation is
/// made once per traversal.
#[derive(Debug)]
pub struct NodeHeap {
    /// Node handles in heap order up to `len`, extracted ones after it
    data: Vec<usize>,

    /// Size of the live heap region
    len: usize,

    /// Tentative distance per handle, `INFINITY` until lowered
    dist: Vec<u32>,

    /// Predecessor handle per handle, `None` until lowered
    prev: Vec<Option<usize>>,

    /// Current slot of each handle in `data`
    pos: Vec<usize>,
}

impl NodeHeap {
    /// Creates a heap holding every node of `graph` at distance `INFINITY`.
    ///
    /// With all keys equal the initial array order is trivially a valid
    /// heap, so no ordering pass is needed.
    pub fn from_graph(graph: &Graph) -> Self {
        let data = graph.handles().to_vec();
        let count = data.len();
        let mut pos = vec![0; count];
        for (slot, &handle) in data.iter().enumerate() {
            pos[handle] = slot;
        }
        NodeHeap {
            len: count,
            data,
            dist: vec![INFINITY; count],
            prev: vec![None; count],
            pos,
        }
    }

    /// Returns true if every node has been extracted
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes still queued
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes and returns the handle with the smallest tentative distance,
    /// or `None` once the heap is drained.
    pub fn extract_min(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.swap(0, self.len);
        self.sift_down(0);
        Some(self.data[self.len])
    }

    /// Lowers the tentative distance of `handle` to `value` and records
    /// `prev` as its predecessor, then restores the heap shape.
    ///
    /// Must only be called for handles still queued, with a value strictly
    /// below the current distance. A non-decreasing value is a caller bug
    /// and panics rather than leaving the heap silently mis-ordered.
    pub fn decrease_distance(&mut self, handle: usize, value: u32, prev: Option<usize>) {
        assert!(
            value < self.dist[handle],
            "decrease_distance: {} does not lower the current distance {}",
            value,
            self.dist[handle]
        );
        self.dist[handle] = value;
        self.prev[handle] = prev;
        self.sift_up(self.pos[handle]);
    }

    /// Tentative distance of `handle`, `INFINITY` if it was never lowered
    pub fn distance(&self, handle: usize) -> u32 {
        self.dist[handle]
    }

    /// Predecessor of `handle` on the best route found so far
    pub fn previous(&self, handle: usize) -> Option<usize> {
        self.prev[handle]
    }

    /// Handles still queued, in heap order with the minimum first
    pub fn live(&self) -> &[usize] {
        &self.data[..self.len]
    }

    /// Consumes the heap and returns the distance and predecessor tables
    pub fn into_parts(self) -> (Vec<u32>, Vec<Option<usize>>) {
        (self.dist, self.prev)
    }

    // Swaps two slots and keeps the position table in step.
    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.pos[self.data[a]] = a;
        self.pos[self.data[b]] = b;
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.dist[self.data[parent]] > self.dist[self.data[slot]] {
                self.swap(parent, slot);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut root: usize) {
        loop {
            let left = 2 * root + 1;
            if left >= self.len {
                break;
            }
            let right = left + 1;
            let mut smallest = root;
            if self.dist[self.data[smallest]] > self.dist[self.data[left]] {
                smallest = left;
            }
            if right < self.len && self.dist[self.data[smallest]] > self.dist[self.data[right]] {
                smallest = right;
            }
            if smallest == root {
                break;
            }
            self.swap(root, smallest);
            root = smallest;
        }
    }
}
