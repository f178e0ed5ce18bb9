use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use vnetgen::config::OutputFormat;
use vnetgen::config_loader::{self, CliOverrides};
use vnetgen::orchestrator::generate_fixtures;
use vnetgen::topology::GeneratorVariant;

/// Random physical/virtual network fixture generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a YAML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for the generated network files
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of networks to generate
    #[arg(short, long)]
    networks: Option<usize>,

    /// Fixed number of physical links per network
    #[arg(short, long)]
    links: Option<usize>,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Generator variant
    #[arg(long, value_enum)]
    variant: Option<GeneratorVariant>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Store every topology edge in both directions
    #[arg(long)]
    symmetric: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            networks: self.networks,
            links: self.links,
            seed: self.seed,
            output_dir: self.output.clone(),
            format: self.format,
            variant: self.variant,
            symmetric: self.symmetric,
        }
    }
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str())).init();

    info!("Starting vnetgen");

    let mut config = config_loader::load_or_default(args.config.as_deref())?;
    config_loader::apply_overrides(&mut config, &args.overrides())?;

    let written = generate_fixtures(&config)?;
    for path in &written {
        info!("Generated {:?}", path);
    }

    info!("Fixture generation completed successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(["vnetgen"]);

        assert_eq!(args.config, None);
        assert_eq!(args.networks, None);
        assert!(!args.symmetric);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_cli_overrides() {
        let args = Args::parse_from([
            "vnetgen",
            "--config", "fixtures.yaml",
            "--networks", "4",
            "--links", "6",
            "--seed", "12",
            "--variant", "independent",
            "--format", "yaml",
            "--symmetric",
        ]);

        assert_eq!(args.config, Some(PathBuf::from("fixtures.yaml")));
        let overrides = args.overrides();
        assert_eq!(overrides.networks, Some(4));
        assert_eq!(overrides.links, Some(6));
        assert_eq!(overrides.seed, Some(12));
        assert_eq!(overrides.variant, Some(GeneratorVariant::Independent));
        assert_eq!(overrides.format, Some(OutputFormat::Yaml));
        assert!(overrides.symmetric);
    }
}
