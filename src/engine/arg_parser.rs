use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::config::DEFAULT_CONFIG_FILE;

/// Concurrent text-encoding scanner.
#[derive(Clone, Parser)]
#[command(name = "encdet")]
#[command(about = "Scan configured directory trees and record file types and text encodings.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Subcommand)]
pub enum Commands {
    /// Run a scan using the configuration file.
    Scan {
        /// Path to the configuration file.
        #[arg(long, short, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Worker pool size override.
        #[arg(long, short)]
        workers: Option<usize>,

        /// Verbose output.
        #[arg(long, short)]
        verbose: bool,
    },
}
