//! Random network topology module.
//!
//! This module contains the connectivity engine ([`Graph`]) and the
//! builder that grows a random graph until every node is reachable.

pub mod types;
pub mod graph;
pub mod builder;

// Re-export key types and functions for easier access
pub use types::{Edge, EdgeMode, GeneratorVariant, Node};
pub use graph::Graph;
pub use builder::{build_connected_topology, build_connected_topology_with, BuildOptions, DEFAULT_MAX_ITERATIONS};
