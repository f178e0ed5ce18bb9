//! Topology type definitions.

use serde::{Deserialize, Serialize};

/// Node identifier, numbered from 1
pub type Node = u32;

/// A directed edge stored under its source node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
}

impl Edge {
    pub fn new(from: Node, to: Node) -> Self {
        Self { from, to }
    }

    /// The same pair pointing the other way
    pub fn reversed(&self) -> Self {
        Self::new(self.to, self.from)
    }
}

/// How `add_edge` stores a connection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    /// Only `(a, b)` is stored; reachability follows edges forward
    #[default]
    Directed,
    /// `(a, b)` and `(b, a)` are both stored
    Symmetric,
}

/// Which generator produces the link set of a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorVariant {
    /// Build a connected random topology first, one link per node
    #[default]
    Connected,
    /// Sample independent links without a backing graph
    Independent,
}
