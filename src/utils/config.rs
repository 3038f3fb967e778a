//! Application configuration constants.
//! Defaults and tuning in one place.

/// Default worker pool size.
pub const DEFAULT_WORKERS: usize = 4;

/// Default accepted-records destination.
pub const DEFAULT_OUTPUT_PATH: &str = "./encdet.out.csv";

/// Default excluded-records destination.
pub const DEFAULT_EXCLUDE_FILE: &str = "./encdet.exclude.csv";

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "encdet.toml";

/// Work-unit channel capacity. The walk blocks on send when the pool falls
/// behind, which bounds discovery ahead of classification.
pub const WORK_UNIT_CHANNEL_CAP: usize = 1024;
