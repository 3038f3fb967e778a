//! Pipeline components: shared context, directory walk, worker pool,
//! orchestration.

pub mod context;
pub mod orchestrator;
pub mod walk;
pub mod worker;

pub use context::ScanContext;
pub use orchestrator::{ScanSummary, run_scan};
pub use walk::walk_root;
pub use worker::spawn_workers;
