//! # vnetgen - Random network fixtures for network pricing solvers
//!
//! This library generates randomized test fixtures describing a two-layer
//! network model: a physical substrate of links with capacity, price,
//! congestion cost and propagation delay, and a set of virtual networks that
//! each claim bandwidth on those links.
//!
//! ## Architecture
//!
//! - `topology`: connectivity engine and random connected topology builder
//! - `network`: exported document model and the parameter assembler
//! - `generator`: per-run generation over both variants
//! - `output`: document serialization and file naming
//! - `config` / `config_loader`: YAML configuration and CLI overrides
//! - `orchestrator`: full run from configuration to files on disk
//! - `utils`: sampling ranges
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vnetgen::{config_loader, orchestrator};
//! use std::path::Path;
//!
//! let config = config_loader::load_config(Path::new("vnetgen.yaml"))?;
//! let written = orchestrator::generate_fixtures(&config)?;
//! // network_0.json, network_1.json, ...
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! Building a topology directly with a seeded generator:
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use vnetgen::topology::build_connected_topology;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut graph = build_connected_topology(5, &mut rng).unwrap();
//! assert_eq!(graph.node_count(), 5);
//! assert!(graph.is_fully_reachable());
//! ```
//!
//! ## Error Handling
//!
//! Topology and sampling code returns [`error::GeneratorError`]; the run
//! level uses `color_eyre` for reporting with context.

pub mod config;
pub mod config_loader;
pub mod error;
pub mod generator;
pub mod network;
pub mod orchestrator;
pub mod output;
pub mod topology;
pub mod utils;
