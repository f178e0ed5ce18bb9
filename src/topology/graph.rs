//! Connectivity engine.
//!
//! A [`Graph`] maps every node to the set of edges leaving it and keeps a
//! transient visited flag per node that is rebuilt on every reachability
//! query. Nodes are remembered in insertion order so the traversal always
//! starts from the first node that entered the graph.

use std::collections::{HashMap, HashSet};

use super::types::{Edge, EdgeMode, Node};

/// Random topology under construction
#[derive(Debug, Clone)]
pub struct Graph {
    /// Target number of distinct nodes
    node_limit: usize,
    /// Whether `add_edge` also stores the reverse edge
    edge_mode: EdgeMode,
    /// Outgoing edges keyed by source node
    neighbors: HashMap<Node, HashSet<Edge>>,
    /// Nodes in the order they were first seen
    insertion_order: Vec<Node>,
    visited: HashMap<Node, bool>,
}

impl Graph {
    /// Create an empty graph that is complete once it holds `node_limit` nodes
    pub fn new(node_limit: usize) -> Self {
        Self::with_edge_mode(node_limit, EdgeMode::Directed)
    }

    pub fn with_edge_mode(node_limit: usize, edge_mode: EdgeMode) -> Self {
        Self {
            node_limit,
            edge_mode,
            neighbors: HashMap::with_capacity(node_limit),
            insertion_order: Vec::with_capacity(node_limit),
            visited: HashMap::with_capacity(node_limit),
        }
    }

    pub fn node_limit(&self) -> usize {
        self.node_limit
    }

    pub fn edge_mode(&self) -> EdgeMode {
        self.edge_mode
    }

    /// Register `node` with an empty edge set if it is not present yet
    pub(crate) fn insert_node(&mut self, node: Node) {
        if !self.neighbors.contains_key(&node) {
            self.neighbors.insert(node, HashSet::new());
            self.insertion_order.push(node);
        }
    }

    /// Add the edge `(from, to)`, registering both endpoints.
    ///
    /// Adding the same pair twice is a no-op. In [`EdgeMode::Symmetric`]
    /// the reverse edge `(to, from)` is stored as well.
    pub fn add_edge(&mut self, from: Node, to: Node) {
        self.insert_node(from);
        self.insert_node(to);

        if let Some(edges) = self.neighbors.get_mut(&from) {
            edges.insert(Edge::new(from, to));
        }
        if self.edge_mode == EdgeMode::Symmetric {
            if let Some(edges) = self.neighbors.get_mut(&to) {
                edges.insert(Edge::new(to, from));
            }
        }
    }

    /// True once the number of distinct nodes equals the configured limit.
    /// Says nothing about connectivity.
    pub fn is_size_limit_reached(&self) -> bool {
        self.neighbors.len() == self.node_limit
    }

    /// True when a depth-first traversal from the start node visits every
    /// node. An empty graph is never reachable.
    pub fn is_fully_reachable(&mut self) -> bool {
        let Some(start) = self.start_node() else {
            return false;
        };

        for node in &self.insertion_order {
            self.visited.insert(*node, false);
        }
        self.depth_first_traversal(start);

        self.visited.values().all(|visited| *visited)
    }

    /// Mark every node reachable from `start` along outgoing edges.
    ///
    /// Uses an explicit stack so large topologies cannot exhaust the call
    /// stack; the set of visited nodes is the same as the recursive walk.
    fn depth_first_traversal(&mut self, start: Node) {
        let mut stack = vec![start];

        while let Some(node) = stack.pop() {
            if self.visited.get(&node).copied().unwrap_or(false) {
                continue;
            }
            self.visited.insert(node, true);

            if let Some(edges) = self.neighbors.get(&node) {
                for edge in edges {
                    if !self.visited.get(&edge.to).copied().unwrap_or(false) {
                        stack.push(edge.to);
                    }
                }
            }
        }
    }

    /// Nodes reachable from the start node, in insertion order.
    ///
    /// Runs a fresh traversal, so the result reflects the current edge set.
    pub fn reachable_nodes(&mut self) -> Vec<Node> {
        let Some(start) = self.start_node() else {
            return Vec::new();
        };

        for node in &self.insertion_order {
            self.visited.insert(*node, false);
        }
        self.depth_first_traversal(start);

        self.insertion_order
            .iter()
            .copied()
            .filter(|node| self.visited.get(node).copied().unwrap_or(false))
            .collect()
    }

    /// The node a reachability query starts from: the first one inserted
    pub fn start_node(&self) -> Option<Node> {
        self.insertion_order.first().copied()
    }

    pub fn contains(&self, node: Node) -> bool {
        self.neighbors.contains_key(&node)
    }

    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn edge_count(&self) -> usize {
        self.neighbors.values().map(HashSet::len).sum()
    }

    /// Node ids sorted ascending
    pub fn nodes(&self) -> Vec<Node> {
        let mut nodes: Vec<Node> = self.neighbors.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    /// All stored edges, sorted by `(from, to)`
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self.neighbors.values().flatten().copied().collect();
        edges.sort_unstable();
        edges
    }

    /// Outgoing edges of `node`, empty if the node is unknown
    pub fn outgoing(&self, node: Node) -> impl Iterator<Item = &Edge> {
        self.neighbors.get(&node).into_iter().flatten()
    }
}
