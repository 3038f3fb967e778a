//! Encdet CLI: scan configured roots and write accepted/excluded CSV records.

use anyhow::Result;
use clap::Parser;
use encdet::engine::arg_parser::Cli;
use encdet::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
