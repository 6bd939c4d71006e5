//! Command-line runner: grow a lattice to completion and render it.

mod render;

use anyhow::{Context, Result};
use grain_core::LatticeConfig;
use grain_sim::Lattice;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config()?;
    info!(
        rows = config.rows,
        cols = config.cols,
        grains = config.grain_count,
        seed = config.seed,
        "starting grain growth"
    );

    let mut lattice = Lattice::new(&config)?;
    let report = lattice.fill()?;
    info!(
        steps = report.steps,
        cells_claimed = report.cells_claimed,
        "simulation complete"
    );

    print!("{}", render::render_table(&lattice));
    Ok(())
}

/// Optional single argument: path to a JSON `LatticeConfig`. Without it,
/// the default 40x40 lattice with 40 grains is used.
fn load_config() -> Result<LatticeConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            let config = serde_json::from_str(&raw)
                .with_context(|| format!("parsing config file {path}"))?;
            Ok(config)
        }
        None => Ok(LatticeConfig::default()),
    }
}
