pub mod config;
pub mod encdet_toml;
pub mod logger;

pub use config::*;
pub use encdet_toml::{load_config, parse_config};
pub use logger::setup_logging;
