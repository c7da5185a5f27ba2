use ansanet::config::Config;
use ansanet::config_loader;
use ansanet::orchestrator::NetworkGenerator;
use ansanet::snapshot::{render_table, InventorySummary, SnapshotStore};
use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Decoy network generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the network parameters YAML file
    #[arg(short, long, default_value = "parameters/network.yml")]
    config: PathBuf,

    /// Directory containing the host blueprint templates
    #[arg(short, long, default_value = "blueprints")]
    blueprints: PathBuf,

    /// Where to write the generated network map
    #[arg(short, long, default_value = "network_map.json")]
    output: PathBuf,

    /// Seed for a reproducible network (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // The configured log level is the default filter; RUST_LOG still wins
    let config = config_loader::load_config(&args.config)?;
    env_logger::Builder::from_env(Env::default().default_filter_or(log_filter(&config))).init();

    info!("Loaded network parameters from: {:?}", args.config);
    info!(
        "Network '{}' ({}) on {}.0/24",
        config.network.id, config.network.domain, config.network.base_ip
    );
    info!("Blueprint directory: {:?}", args.blueprints);
    info!("Output file: {:?}", args.output);

    let mut rng = match args.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let store = SnapshotStore::new();
    let mut generator = NetworkGenerator::new(config, &args.blueprints, &args.output)?;
    let snapshot = generator.generate(&store, &mut rng)?;

    let meta = &snapshot.network_metadata;
    let summary = InventorySummary::from_snapshot(&snapshot);
    info!("Network generated: {} ({})", meta.id, meta.domain);
    info!(
        "Total hosts: {} (servers: {}, infra: {}, workstations: {})",
        meta.total_nodes, summary.servers, summary.infra, summary.workstations
    );

    print!("{}", render_table(&snapshot));
    info!("Full state saved to: {:?}", generator.output_path());
    Ok(())
}

/// Default log filter: the configured level, or `info`
fn log_filter(config: &Config) -> String {
    config.log_level().unwrap_or("info").to_string()
}
