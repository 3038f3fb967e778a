//! Console logging: env_logger with a compact colored format. Dependencies
//! stay at warn; the crate's own level follows --verbose.

use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::Write;

pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::from_default_env()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_PKG_NAME"), level)
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME").cyan();
            match record.level() {
                Level::Warn => writeln!(
                    buf,
                    "[{} {} {}] {}",
                    name,
                    "WARN".yellow(),
                    record.target(),
                    record.args()
                ),
                Level::Error => writeln!(
                    buf,
                    "[{} {} {}] {}",
                    name,
                    "ERROR".red(),
                    record.target(),
                    record.args()
                ),
                _ => writeln!(buf, "[{}] {}", name, record.args()),
            }
        })
        .init();
}
