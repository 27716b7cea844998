use crate::{Error, Result};

/// External identifier of a node, assigned by the data feed
pub type NodeId = u32;

/// A directed link with its minimum transit delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Handle of the node this link points at
    pub target: usize,

    /// Minimum delay across this link, never negative
    pub delay: i32,
}

/// One arena slot: the node's external id plus its outgoing links
#[derive(Debug, Clone)]
struct Node {
    id: NodeId,
    edges: Vec<Edge>,
}

/// A growable directed network addressed by caller-assigned node ids.
///
/// Nodes live in an arena and are referred to by dense `usize` handles that
/// stay valid for the lifetime of the graph. Lookups by id go through a
/// separate handle array kept sorted by id; insertions only mark that array
/// dirty and the next lookup re-sorts it once, so a bulk load followed by a
/// burst of queries pays for a single sort.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Arena of nodes, indexed by handle
    nodes: Vec<Node>,

    /// Handles ordered by node id whenever `sorted` holds
    order: Vec<usize>,

    sorted: bool,
}

impl Graph {
    /// Creates a new empty network
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            order: Vec::new(),
            sorted: true,
        }
    }

    /// Creates a new empty network with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(nodes),
            order: Vec::with_capacity(nodes),
            sorted: true,
        }
    }

    /// Adds a node with the given external id and returns its handle.
    ///
    /// Ids are not checked for uniqueness; when several nodes share an id,
    /// `lookup` resolves that id to one of them without promising which.
    pub fn insert_node(&mut self, id: NodeId) -> usize {
        let handle = self.nodes.len();
        self.nodes.push(Node {
            id,
            edges: Vec::new(),
        });
        self.order.push(handle);
        self.sorted = false;
        handle
    }

    /// Adds a directed link between two nodes given by external id.
    ///
    /// Fails if the delay is negative or either endpoint has not been
    /// inserted. Parallel links are allowed and kept in insertion order.
    pub fn insert_edge(&mut self, source: NodeId, dest: NodeId, delay: i32) -> Result<()> {
        if delay < 0 {
            return Err(Error::NegativeDelay(source, dest, delay));
        }
        let from = self.lookup(source).ok_or(Error::NodeNotFound(source))?;
        let to = self.lookup(dest).ok_or(Error::NodeNotFound(dest))?;
        self.nodes[from].edges.push(Edge { target: to, delay });
        Ok(())
    }

    /// Resolves an external id to its node handle.
    ///
    /// Takes `&mut self` because a lookup after insertions first restores
    /// the sorted order of the handle array, then binary-searches it.
    pub fn lookup(&mut self, id: NodeId) -> Option<usize> {
        if !self.sorted {
            let nodes = &self.nodes;
            self.order.sort_unstable_by_key(|&handle| nodes[handle].id);
            self.sorted = true;
        }
        let nodes = &self.nodes;
        self.order
            .binary_search_by(|&handle| nodes[handle].id.cmp(&id))
            .ok()
            .map(|slot| self.order[slot])
    }

    /// Returns the external id of the node behind `handle`.
    ///
    /// Panics if the handle was not issued by this graph.
    pub fn node_id(&self, handle: usize) -> NodeId {
        self.nodes[handle].id
    }

    /// Returns the outgoing links of the node behind `handle`.
    ///
    /// Panics if the handle was not issued by this graph.
    pub fn outgoing(&self, handle: usize) -> &[Edge] {
        &self.nodes[handle].edges
    }

    /// Number of nodes in the network
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed links in the network
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }

    /// Whether the lookup array currently reflects id order
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Snapshot of every handle, in the lookup array's current order
    pub(crate) fn handles(&self) -> &[usize] {
        &self.order
    }
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}
