use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::GeneratorError;
use crate::network::types::Mode;
use crate::topology::builder::DEFAULT_MAX_ITERATIONS;
use crate::topology::types::{EdgeMode, GeneratorVariant};
use crate::utils::range::ValueRange;

/// Top-level configuration structure that mirrors the YAML configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub topology: TopologyConfig,
    pub solver: SolverParams,
    pub sampling: SamplingConfig,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.general.networks == 0 {
            return Err(ValidationError::InvalidGeneral(
                "networks must be at least 1".to_string(),
            ));
        }

        let topology = &self.topology;
        if topology.min_links == 0 {
            return Err(ValidationError::InvalidTopology(
                "min_links must be at least 1".to_string(),
            ));
        }
        if topology.min_links >= topology.max_links {
            return Err(ValidationError::InvalidTopology(format!(
                "min_links ({}) must be below max_links ({})",
                topology.min_links, topology.max_links
            )));
        }

        if self.solver.solve_timeout <= 0 {
            return Err(ValidationError::InvalidSolver(
                "solve_timeout must be positive".to_string(),
            ));
        }

        self.sampling.validate()?;

        Ok(())
    }
}

/// Run-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Number of documents to generate per run
    pub networks: usize,
    /// Directory the `network_<index>` files are written to
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    /// Fixed seed for reproducible fixtures; entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Serialized form of the generated documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// How the link set of each document is produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyConfig {
    pub variant: GeneratorVariant,
    /// Link count is drawn from `[min_links, max_links)`
    pub min_links: usize,
    pub max_links: usize,
    pub edge_mode: EdgeMode,
    /// Random insertions before linking the rest deterministically; `null`
    /// keeps sampling until the graph converges
    pub max_iterations: Option<u64>,
}

/// Solver settings copied verbatim into every document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverParams {
    pub mode: Mode,
    pub solve_timeout: i32,
    pub q: f64,
    pub l0: f64,
    pub path_rate_goal_weight: f64,
}

/// Sampling bounds for every randomized field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub max_bandwidth_sum: ValueRange<i32>,
    pub assigned_bandwidth: ValueRange<i32>,
    pub price_weighted_factor: ValueRange<f64>,
    pub bandwidth_capacity: ValueRange<i32>,
    pub bandwidth_price: ValueRange<i32>,
    pub congestion_price: ValueRange<f64>,
    pub propagation_delay: ValueRange<i32>,
}

impl SamplingConfig {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        self.max_bandwidth_sum.validate("max_bandwidth_sum")?;
        self.assigned_bandwidth.validate("assigned_bandwidth")?;
        self.price_weighted_factor.validate("price_weighted_factor")?;
        self.bandwidth_capacity.validate("bandwidth_capacity")?;
        self.bandwidth_price.validate("bandwidth_price")?;
        self.congestion_price.validate("congestion_price")?;
        self.propagation_delay.validate("propagation_delay")?;
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid general configuration: {0}")]
    InvalidGeneral(String),
    #[error("Invalid topology configuration: {0}")]
    InvalidTopology(String),
    #[error("Invalid solver configuration: {0}")]
    InvalidSolver(String),
    #[error("Invalid sampling configuration: {0}")]
    InvalidSampling(#[from] GeneratorError),
}

/// Default implementations
impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            networks: 2,
            output_dir: PathBuf::from("."),
            format: OutputFormat::Json,
            seed: None,
        }
    }
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            variant: GeneratorVariant::Connected,
            min_links: 2,
            max_links: 4,
            edge_mode: EdgeMode::Directed,
            max_iterations: Some(DEFAULT_MAX_ITERATIONS),
        }
    }
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            mode: Mode::Optimum,
            solve_timeout: 6666,
            q: 0.5,
            l0: 0.001,
            path_rate_goal_weight: 0.0000001,
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_bandwidth_sum: ValueRange::new(100, 700),
            assigned_bandwidth: ValueRange::new(1, 300),
            price_weighted_factor: ValueRange::new(1.0, 15.0),
            bandwidth_capacity: ValueRange::new(100, 1000),
            bandwidth_price: ValueRange::new(0, 10),
            congestion_price: ValueRange::new(0.1, 0.9),
            propagation_delay: ValueRange::new(1, 30),
        }
    }
}
