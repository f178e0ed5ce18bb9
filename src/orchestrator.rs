//! Fixture orchestrator.
//!
//! This module coordinates a full run, from a validated configuration
//! through generation to the files on disk.

use crate::config::Config;
use crate::generator::{generate_networks, make_rng};
use crate::output::write_networks;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::path::PathBuf;

/// Generate and write every document described by `config`
pub fn generate_fixtures(config: &Config) -> Result<Vec<PathBuf>> {
    config.validate()?;

    info!(
        "Generating {} {:?} network(s) with {} to {} links ({:?} edges, mode {})",
        config.general.networks,
        config.topology.variant,
        config.topology.min_links,
        config.topology.max_links.saturating_sub(1),
        config.topology.edge_mode,
        config.solver.mode,
    );

    let mut rng = make_rng(config.general.seed);
    let networks = generate_networks(config, &mut rng).wrap_err("Failed to generate networks")?;

    for (index, network) in networks.iter().enumerate() {
        info!(
            "  - network_{}: {} physical links, {} virtual networks",
            index,
            network.physical_links.len(),
            network.virtual_networks.len()
        );
    }

    write_networks(&networks, config.general.format, &config.general.output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::types::NetworkGraph;
    use tempfile::TempDir;

    #[test]
    fn test_generate_fixtures_writes_every_document() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.general.networks = 3;
        config.general.seed = Some(5);
        config.general.output_dir = dir.path().to_path_buf();

        let written = generate_fixtures(&config).unwrap();

        assert_eq!(written.len(), 3);
        for path in &written {
            let content = std::fs::read_to_string(path).unwrap();
            let document: NetworkGraph = serde_json::from_str(&content).unwrap();
            assert_eq!(document.virtual_networks.len(), document.physical_links.len());
        }
    }

    #[test]
    fn test_generate_fixtures_rejects_invalid_config() {
        let mut config = Config::default();
        config.general.networks = 0;
        assert!(generate_fixtures(&config).is_err());
    }
}
