//! Random connected topology construction.
//!
//! The builder keeps adding random edges between distinct nodes until the
//! graph holds every node of the pool and a traversal from the start node
//! reaches all of them. Random construction converges with probability 1
//! but has no hard bound, so an optional iteration budget switches to a
//! deterministic spanning fallback once it runs out.

use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;

use super::graph::Graph;
use super::types::{EdgeMode, Node};
use crate::error::GeneratorError;

/// Default number of random edge insertions before the fallback kicks in
pub const DEFAULT_MAX_ITERATIONS: u64 = 100_000;

/// Tuning knobs for [`build_connected_topology_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    pub edge_mode: EdgeMode,
    /// `None` keeps sampling until the graph converges
    pub max_iterations: Option<u64>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            edge_mode: EdgeMode::Directed,
            max_iterations: Some(DEFAULT_MAX_ITERATIONS),
        }
    }
}

/// Build a fully reachable random graph over nodes `1..=node_limit` with
/// the default options.
pub fn build_connected_topology<R: Rng + ?Sized>(
    node_limit: usize,
    rng: &mut R,
) -> Result<Graph, GeneratorError> {
    build_connected_topology_with(node_limit, &BuildOptions::default(), rng)
}

/// Build a fully reachable random graph over nodes `1..=node_limit`.
///
/// # Errors
/// Returns [`GeneratorError::InvalidArgument`] when `node_limit` is 0 or
/// does not fit a node identifier.
pub fn build_connected_topology_with<R: Rng + ?Sized>(
    node_limit: usize,
    options: &BuildOptions,
    rng: &mut R,
) -> Result<Graph, GeneratorError> {
    if node_limit == 0 {
        return Err(GeneratorError::InvalidArgument(
            "node limit must be at least 1".to_string(),
        ));
    }
    let last_node = Node::try_from(node_limit).map_err(|_| {
        GeneratorError::InvalidArgument(format!("node limit {} is too large", node_limit))
    })?;

    let pool: Vec<Node> = (1..=last_node).collect();
    let mut graph = Graph::with_edge_mode(node_limit, options.edge_mode);

    // A lone node is trivially connected and has nobody to link to
    if node_limit == 1 {
        graph.insert_node(1);
        return Ok(graph);
    }

    let mut iterations: u64 = 0;
    while !(graph.is_size_limit_reached() && graph.is_fully_reachable()) {
        if options.max_iterations.is_some_and(|max| iterations >= max) {
            warn!(
                "Topology with {} nodes not connected after {} iterations, linking remaining nodes",
                node_limit, iterations
            );
            link_unreached_nodes(&mut graph, &pool, rng);
            break;
        }

        let (from, to) = sample_distinct_pair(&pool, rng);
        graph.add_edge(from, to);
        iterations += 1;
    }

    debug!(
        "Built {:?} topology: {}/{} nodes, {} edges after {} iterations",
        graph.edge_mode(),
        graph.node_count(),
        graph.node_limit(),
        graph.edge_count(),
        iterations
    );

    Ok(graph)
}

/// Pick two distinct nodes uniformly. The pool must hold at least two nodes.
fn sample_distinct_pair<R: Rng + ?Sized>(pool: &[Node], rng: &mut R) -> (Node, Node) {
    let from = pool[rng.gen_range(0..pool.len())];
    let mut to = pool[rng.gen_range(0..pool.len())];
    while to == from {
        to = pool[rng.gen_range(0..pool.len())];
    }
    (from, to)
}

/// Attach every node the start node cannot reach to a random node that it
/// already reaches. Afterwards the graph holds the whole pool and is fully
/// reachable in either edge mode.
fn link_unreached_nodes<R: Rng + ?Sized>(graph: &mut Graph, pool: &[Node], rng: &mut R) {
    let mut reached = graph.reachable_nodes();
    if reached.is_empty() {
        if let Some(&first) = pool.first() {
            graph.insert_node(first);
            reached.push(first);
        }
    }
    let mut reached_set: HashSet<Node> = reached.iter().copied().collect();

    for &node in pool {
        if reached_set.contains(&node) {
            continue;
        }
        let anchor = reached[rng.gen_range(0..reached.len())];
        graph.add_edge(anchor, node);
        reached.push(node);
        reached_set.insert(node);
    }
}
