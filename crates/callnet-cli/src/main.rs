//! Callnet runner
//!
//! Runs one simulation and prints its report as JSON on stdout.
//!
//! Usage: `callnet [config.json]`
//!
//! Without a config file, `CALLNET_*` environment variables override the
//! canonical defaults. Logs go to stderr; `RUST_LOG` controls verbosity.

use std::env;

use callnet_sim::{Simulation, SimulationConfig, TracingReporter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "callnet=info,callnet_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match env::args().nth(1) {
        Some(path) => {
            tracing::info!("Loading config from {}", path);
            SimulationConfig::from_json_file(&path)?
        }
        None => SimulationConfig::from_env()?,
    };

    tracing::info!(
        "Simulating {} subscribers until subscriber {} reaches a component of {}",
        config.population,
        config.target_node,
        config.target_size
    );

    let mut simulation = Simulation::new(config)?;
    let report = simulation.run_with(&mut TracingReporter);

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
