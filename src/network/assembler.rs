//! Network parameter assembly.
//!
//! Decorates a node set with randomly sampled physical link attributes and
//! one virtual network per node. Values are drawn independently; nothing
//! checks that a virtual network's `MaxBandwidthSum` matches the bandwidth
//! it is assigned per link, or that assigned bandwidth fits the capacity.

use std::collections::BTreeMap;

use rand::Rng;

use super::types::{Link, LinkKey, NetworkGraph, PhysicalLink, VirtualLinkParameters, VirtualNetwork};
use crate::config::{SamplingConfig, SolverParams};
use crate::topology::graph::Graph;
use crate::topology::types::Node;

/// Assemble a document with one physical link and one virtual network per
/// node of a finished topology
pub fn assemble_from_topology<R: Rng + ?Sized>(
    graph: &Graph,
    solver: &SolverParams,
    sampling: &SamplingConfig,
    rng: &mut R,
) -> NetworkGraph {
    assemble_network(&graph.nodes(), solver, sampling, rng)
}

/// Assemble a document for `link_count` independent links numbered from 1,
/// without a backing topology
pub fn assemble_independent<R: Rng + ?Sized>(
    link_count: usize,
    solver: &SolverParams,
    sampling: &SamplingConfig,
    rng: &mut R,
) -> NetworkGraph {
    let nodes: Vec<Node> = (1..).take(link_count).collect();
    assemble_network(&nodes, solver, sampling, rng)
}

/// Assemble a document for the given node ids.
///
/// Physical link `i` (1-based) is created for the `i`-th node; every
/// virtual network gets one parameter entry per physical link.
pub fn assemble_network<R: Rng + ?Sized>(
    nodes: &[Node],
    solver: &SolverParams,
    sampling: &SamplingConfig,
    rng: &mut R,
) -> NetworkGraph {
    let physical_links = generate_physical_links(nodes.len(), sampling, rng);

    let virtual_networks = nodes
        .iter()
        .map(|&id| {
            let max_bandwidth_sum = sampling.max_bandwidth_sum.sample(rng);
            generate_virtual_network(id, max_bandwidth_sum, physical_links.len(), sampling, rng)
        })
        .collect();

    NetworkGraph {
        mode: solver.mode,
        solve_timeout: solver.solve_timeout,
        q: solver.q,
        l0: solver.l0,
        path_rate_goal_weight: solver.path_rate_goal_weight,
        physical_links,
        virtual_networks,
    }
}

/// Sample `count` physical links with ids `1..=count`
pub fn generate_physical_links<R: Rng + ?Sized>(
    count: usize,
    sampling: &SamplingConfig,
    rng: &mut R,
) -> Vec<PhysicalLink> {
    (1..)
        .take(count)
        .map(|id| PhysicalLink {
            id,
            bandwidth_capacity: sampling.bandwidth_capacity.sample(rng),
            bandwidth_price: sampling.bandwidth_price.sample(rng),
            congestion_price: sampling.congestion_price.sample(rng),
            propagation_delay: sampling.propagation_delay.sample(rng),
        })
        .collect()
}

/// Build a virtual network claiming a share of links `1..=link_count`
pub fn generate_virtual_network<R: Rng + ?Sized>(
    id: Node,
    max_bandwidth_sum: i32,
    link_count: usize,
    sampling: &SamplingConfig,
    rng: &mut R,
) -> VirtualNetwork {
    let per_link_params: BTreeMap<LinkKey, VirtualLinkParameters> = (1..)
        .take(link_count)
        .map(|link_id| {
            let params = VirtualLinkParameters {
                link: Link { id: link_id },
                assigned_bandwidth: sampling.assigned_bandwidth.sample(rng),
                price_weighted_factor: sampling.price_weighted_factor.sample(rng),
            };
            (LinkKey(link_id), params)
        })
        .collect();

    VirtualNetwork {
        per_link_params,
        id,
        max_bandwidth_sum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::builder::build_connected_topology;
    use crate::utils::range::ValueRange;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_assemble_from_topology_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = build_connected_topology(4, &mut rng).unwrap();
        let document = assemble_from_topology(&graph, &SolverParams::default(), &SamplingConfig::default(), &mut rng);

        assert_eq!(document.physical_links.len(), 4);
        assert_eq!(document.virtual_networks.len(), 4);
        for network in &document.virtual_networks {
            assert_eq!(network.link_keys(), vec!["1", "2", "3", "4"]);
        }
    }

    #[test]
    fn test_ids_follow_node_indices() {
        let mut rng = StdRng::seed_from_u64(2);
        let document = assemble_independent(3, &SolverParams::default(), &SamplingConfig::default(), &mut rng);

        let link_ids: Vec<u32> = document.physical_links.iter().map(|link| link.id).collect();
        let network_ids: Vec<u32> = document.virtual_networks.iter().map(|network| network.id).collect();
        assert_eq!(link_ids, vec![1, 2, 3]);
        assert_eq!(network_ids, vec![1, 2, 3]);

        for network in &document.virtual_networks {
            for (key, params) in &network.per_link_params {
                assert_eq!(key.0, params.link.id);
            }
        }
    }

    #[test]
    fn test_sampled_values_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        let sampling = SamplingConfig::default();
        let document = assemble_independent(12, &SolverParams::default(), &sampling, &mut rng);

        for link in &document.physical_links {
            assert!(sampling.bandwidth_capacity.contains(link.bandwidth_capacity));
            assert!(sampling.bandwidth_price.contains(link.bandwidth_price));
            assert!(sampling.congestion_price.contains(link.congestion_price));
            assert!(sampling.propagation_delay.contains(link.propagation_delay));
        }
        for network in &document.virtual_networks {
            assert!(sampling.max_bandwidth_sum.contains(network.max_bandwidth_sum));
            for params in network.per_link_params.values() {
                assert!(sampling.assigned_bandwidth.contains(params.assigned_bandwidth));
                assert!(sampling.price_weighted_factor.contains(params.price_weighted_factor));
            }
        }
    }

    #[test]
    fn test_solver_params_are_copied() {
        let mut rng = StdRng::seed_from_u64(4);
        let solver = SolverParams {
            mode: crate::network::types::Mode::Nash,
            solve_timeout: 120,
            q: 0.25,
            l0: 0.01,
            path_rate_goal_weight: 0.5,
        };
        let document = assemble_independent(2, &solver, &SamplingConfig::default(), &mut rng);

        assert_eq!(document.mode, solver.mode);
        assert_eq!(document.solve_timeout, 120);
        assert_eq!(document.q, 0.25);
        assert_eq!(document.l0, 0.01);
        assert_eq!(document.path_rate_goal_weight, 0.5);
    }

    #[test]
    fn test_single_value_ranges_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(5);
        let sampling = SamplingConfig {
            bandwidth_capacity: ValueRange::new(500, 501),
            ..SamplingConfig::default()
        };
        let links = generate_physical_links(5, &sampling, &mut rng);
        assert!(links.iter().all(|link| link.bandwidth_capacity == 500));
    }

    #[test]
    fn test_empty_node_set_gives_empty_document() {
        let mut rng = StdRng::seed_from_u64(6);
        let document = assemble_network(&[], &SolverParams::default(), &SamplingConfig::default(), &mut rng);
        assert!(document.physical_links.is_empty());
        assert!(document.virtual_networks.is_empty());
    }
}
