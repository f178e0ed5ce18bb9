//! Fixture output.
//!
//! Every document is written to its own file, `network_<index>.<ext>`,
//! with the index counting from 0 in generation order.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Context, Result};

use crate::config::OutputFormat;
use crate::network::types::NetworkGraph;

/// File name for the document at `index`
pub fn network_file_name(index: usize, format: OutputFormat) -> String {
    format!("network_{}.{}", index, format.extension())
}

/// Serialize a document in the requested format
pub fn render_network(network: &NetworkGraph, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(network).context("Failed to serialize network to JSON")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(network).context("Failed to serialize network to YAML")
        }
    }
}

/// Write one document to `output_path`
pub fn write_network(network: &NetworkGraph, format: OutputFormat, output_path: &Path) -> Result<()> {
    let content = render_network(network, format)?;

    fs::write(output_path, content)
        .with_context(|| format!("Failed to write network to {}", output_path.display()))?;

    log::debug!("Network written to {}", output_path.display());
    Ok(())
}

/// Write all documents into `output_dir`, creating it if needed.
///
/// Returns the written paths in index order.
pub fn write_networks(
    networks: &[NetworkGraph],
    format: OutputFormat,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory '{}'", output_dir.display()))?;

    let mut written = Vec::with_capacity(networks.len());
    for (index, network) in networks.iter().enumerate() {
        let path = output_dir.join(network_file_name(index, format));
        write_network(network, format, &path)?;
        written.push(path);
    }

    log::info!("Wrote {} network files to {}", written.len(), output_dir.display());
    Ok(written)
}
