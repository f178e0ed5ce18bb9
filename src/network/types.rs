//! Exported fixture document.
//!
//! Field names serialize in PascalCase (`SolveTimeout`, `PhysicalLinks`,
//! `PerLinkParams`, ...) and fields keep their declaration order, which is
//! the layout solvers consuming these fixtures read.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Solver objective the fixture is meant for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Mode {
    #[serde(alias = "nash")]
    Nash,
    #[default]
    #[serde(alias = "optimum")]
    Optimum,
}

impl Mode {
    /// Lowercase name used on the command line and in configuration files
    pub fn mode_name(&self) -> &'static str {
        match self {
            Self::Nash => "nash",
            Self::Optimum => "optimum",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mode_name())
    }
}

/// One generated fixture: solver settings plus both network layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkGraph {
    pub mode: Mode,
    pub solve_timeout: i32,
    pub q: f64,
    pub l0: f64,
    pub path_rate_goal_weight: f64,
    pub physical_links: Vec<PhysicalLink>,
    pub virtual_networks: Vec<VirtualNetwork>,
}

/// Substrate link with its economic and physical attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhysicalLink {
    pub id: u32,
    pub bandwidth_capacity: i32,
    pub bandwidth_price: i32,
    pub congestion_price: f64,
    pub propagation_delay: i32,
}

/// Bandwidth demand of one virtual network across all physical links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VirtualNetwork {
    pub per_link_params: BTreeMap<LinkKey, VirtualLinkParameters>,
    pub id: u32,
    pub max_bandwidth_sum: i32,
}

impl VirtualNetwork {
    /// Per-link keys as they appear in the serialized document
    pub fn link_keys(&self) -> Vec<String> {
        self.per_link_params.keys().map(LinkKey::to_string).collect()
    }
}

/// Share of one physical link claimed by a virtual network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VirtualLinkParameters {
    pub link: Link,
    pub assigned_bandwidth: i32,
    pub price_weighted_factor: f64,
}

/// Reference to a physical link by id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Link {
    pub id: u32,
}

/// 1-based physical link index used as a `PerLinkParams` key.
///
/// Serializes as a decimal string but orders numerically, so `"10"` sorts
/// after `"9"` in the written document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkKey(pub u32);

impl fmt::Display for LinkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LinkKey {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(LinkKey)
    }
}

impl Serialize for LinkKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LinkKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
