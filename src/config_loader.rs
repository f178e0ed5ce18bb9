use crate::config::{Config, OutputFormat};
use crate::topology::types::{EdgeMode, GeneratorVariant};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Load, parse and validate configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<Config> {
    let config = read_config(config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse a YAML configuration file without validating it.
///
/// Used when CLI overrides are still to be applied; [`apply_overrides`]
/// validates the merged result.
pub fn read_config(config_path: &Path) -> Result<Config> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open configuration '{}'", config_path.display()))?;

    let config: Config = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse configuration '{}'", config_path.display()))?;

    Ok(config)
}

/// Read the configuration file if one was given, otherwise use defaults.
///
/// The result is not validated yet; pass it through [`apply_overrides`].
pub fn load_or_default(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => read_config(path),
        None => {
            info!("No configuration file given, using built-in defaults");
            Ok(Config::default())
        }
    }
}

/// CLI arguments that override YAML settings
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub networks: Option<usize>,
    /// Fixed link count for every document
    pub links: Option<usize>,
    pub seed: Option<u64>,
    pub output_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub variant: Option<GeneratorVariant>,
    pub symmetric: bool,
}

/// Apply CLI overrides to a configuration
pub fn apply_overrides(config: &mut Config, overrides: &CliOverrides) -> Result<()> {
    if let Some(networks) = overrides.networks {
        info!("Overriding network count: {}", networks);
        config.general.networks = networks;
    }

    if let Some(links) = overrides.links {
        info!("Using a fixed link count of {}", links);
        config.topology.min_links = links;
        config.topology.max_links = links.saturating_add(1);
    }

    if let Some(seed) = overrides.seed {
        config.general.seed = Some(seed);
    }

    if let Some(output_dir) = &overrides.output_dir {
        config.general.output_dir = output_dir.clone();
    }

    if let Some(format) = overrides.format {
        config.general.format = format;
    }

    if let Some(variant) = overrides.variant {
        config.topology.variant = variant;
    }

    if overrides.symmetric {
        config.topology.edge_mode = EdgeMode::Symmetric;
    }

    // The merged configuration is validated once, here
    config.validate()?;

    Ok(())
}
