//! Exported network fixtures.
//!
//! This module contains the document model written to disk and the
//! assembler that fills it with sampled link and demand parameters.

pub mod types;
pub mod assembler;

pub use types::{Link, LinkKey, Mode, NetworkGraph, PhysicalLink, VirtualLinkParameters, VirtualNetwork};
pub use assembler::{assemble_from_topology, assemble_independent, assemble_network};
