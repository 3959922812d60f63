//! # KubeMon
//!
//! Client-side reconciliation and normalization for the KubeMon Kubernetes
//! monitoring dashboard.
//!
//! ## Features
//!
//! - **Pod Reconciliation**: Collapses polled pod snapshots into one record per `namespace/name`
//! - **Health Statistics**: Restart and CrashLoopBackOff counts with a deterministic top restarter
//! - **AI Analysis Normalization**: Ordered, fully-populated categories from loosely shaped AI output
//! - **Risk Ranking**: One overall risk label with unknown labels ranked below `low`
//!
//! ## Example
//!
//! ```rust
//! use kubemon::analyzer::{build_pod_report, PodRecord, PodStatus};
//!
//! let report = build_pod_report(vec![
//!     PodRecord::new("prod", "api", PodStatus::Running, 0),
//!     PodRecord::new("prod", "api", PodStatus::CrashLoopBackOff, 4),
//! ]);
//! assert_eq!(report.stats.total_pods, 1);
//! assert_eq!(report.stats.crash_loop_pods, 0);
//! ```

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;

use cli::Commands;
use config::types::Config;

// Re-export commonly used types and functions
pub use analyzer::{
    AnalysisReport, CategoryEntry, HealthStats, PodHealthReport, PodRecord, ReconciledPodSet,
    compute_stats, filter_problematic, normalize, overall_risk, reconcile, sanitize,
};
pub use error::{ConfigError, KubemonError, Result};
pub use handlers::{handle_analysis, handle_config, handle_pods};

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a parsed command and return its rendered output.
pub fn run_command(command: &Commands, config: &Config) -> Result<String> {
    match command {
        Commands::Pods { path, format, all } => {
            handlers::handle_pods(path.as_deref(), format.as_deref(), *all, config)
        }
        Commands::Analysis { path, format, raw } => {
            handlers::handle_analysis(path.as_deref(), format.as_deref(), *raw, config)
        }
        Commands::Config { command } => handlers::handle_config(command, config),
    }
}
