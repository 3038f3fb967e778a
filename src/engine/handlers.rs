//! Command handlers: wire the CLI into config loading and the scan pipeline.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, bail};
use log::info;

use crate::classify::FileToolClassifier;
use crate::engine::arg_parser::{Cli, Commands};
use crate::pipeline::run_scan;
use crate::utils::{load_config, setup_logging};

pub fn handle_run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Scan {
            config,
            workers,
            verbose,
        } => handle_scan(config, *workers, *verbose),
    }
}

fn handle_scan(config_path: &Path, workers: Option<usize>, verbose: bool) -> Result<()> {
    setup_logging(verbose);

    let mut config = load_config(config_path)?;
    if let Some(n) = workers {
        if n == 0 {
            bail!("--workers must be at least 1");
        }
        config.workers = n;
    }

    info!(
        "scanning {} path(s) with {} worker(s)",
        config.scan_paths.len(),
        config.workers
    );
    let summary = run_scan(&config, Arc::new(FileToolClassifier))?;
    info!(
        "scan done: {} accepted, {} excluded ({} directories visited with files)",
        summary.accepted, summary.excluded, summary.units
    );
    info!(
        "results written to {} and {}",
        config.output_path.display(),
        config.exclude_file.display()
    );
    Ok(())
}
