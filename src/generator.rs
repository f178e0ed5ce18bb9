//! Fixture generation.
//!
//! Picks a link count per document and routes it through one of the two
//! variants: the connected variant grows a random topology first, the
//! independent variant samples links directly. Both hand off to the same
//! assembler.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::error::GeneratorError;
use crate::network::assembler::{assemble_from_topology, assemble_independent};
use crate::network::types::NetworkGraph;
use crate::topology::builder::{build_connected_topology_with, BuildOptions};
use crate::topology::types::GeneratorVariant;

/// Random source for a run: seeded when a seed is configured, entropy otherwise
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!("Using fixed random seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Generate `config.general.networks` documents
pub fn generate_networks<R: Rng + ?Sized>(
    config: &Config,
    rng: &mut R,
) -> Result<Vec<NetworkGraph>, GeneratorError> {
    let topology = &config.topology;
    if topology.min_links == 0 || topology.min_links >= topology.max_links {
        return Err(GeneratorError::InvalidArgument(format!(
            "link count range [{}, {}) is empty or starts at 0",
            topology.min_links, topology.max_links
        )));
    }

    (0..config.general.networks)
        .map(|index| {
            let link_count = rng.gen_range(topology.min_links..topology.max_links);
            debug!("Document {}: {} links", index, link_count);
            generate_network(link_count, config, rng)
        })
        .collect()
}

/// Generate one document with `link_count` physical links
pub fn generate_network<R: Rng + ?Sized>(
    link_count: usize,
    config: &Config,
    rng: &mut R,
) -> Result<NetworkGraph, GeneratorError> {
    if link_count == 0 {
        return Err(GeneratorError::InvalidArgument(
            "link count must be at least 1".to_string(),
        ));
    }

    match config.topology.variant {
        GeneratorVariant::Connected => {
            let options = BuildOptions {
                edge_mode: config.topology.edge_mode,
                max_iterations: config.topology.max_iterations,
            };
            let graph = build_connected_topology_with(link_count, &options, rng)?;
            debug!(
                "Connected topology ready: {} nodes, {} edges",
                graph.node_count(),
                graph.edge_count()
            );
            Ok(assemble_from_topology(&graph, &config.solver, &config.sampling, rng))
        }
        GeneratorVariant::Independent => Ok(assemble_independent(
            link_count,
            &config.solver,
            &config.sampling,
            rng,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_networks_count_and_shape() {
        let config = Config::default();
        let mut rng = make_rng(Some(1));
        let documents = generate_networks(&config, &mut rng).unwrap();

        assert_eq!(documents.len(), 2);
        for document in &documents {
            let links = document.physical_links.len();
            assert!((2..4).contains(&links));
            assert_eq!(document.virtual_networks.len(), links);
        }
    }

    #[test]
    fn test_independent_variant() {
        let mut config = Config::default();
        config.topology.variant = GeneratorVariant::Independent;
        let mut rng = make_rng(Some(2));

        let document = generate_network(5, &config, &mut rng).unwrap();
        assert_eq!(document.physical_links.len(), 5);
        assert!(document.virtual_networks.iter().all(|network| network.per_link_params.len() == 5));
    }

    #[test]
    fn test_zero_links_rejected_for_both_variants() {
        let mut config = Config::default();
        let mut rng = make_rng(Some(3));
        assert!(matches!(
            generate_network(0, &config, &mut rng),
            Err(GeneratorError::InvalidArgument(_))
        ));

        config.topology.variant = GeneratorVariant::Independent;
        assert!(generate_network(0, &config, &mut rng).is_err());
    }

    #[test]
    fn test_empty_link_range_rejected() {
        let mut config = Config::default();
        config.topology.min_links = 3;
        config.topology.max_links = 3;
        let mut rng = make_rng(Some(4));

        assert!(generate_networks(&config, &mut rng).is_err());
    }

    #[test]
    fn test_seeded_runs_match() {
        let config = Config::default();
        let first = generate_networks(&config, &mut make_rng(Some(77))).unwrap();
        let second = generate_networks(&config, &mut make_rng(Some(77))).unwrap();
        assert_eq!(first, second);
    }
}
