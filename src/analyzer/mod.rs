//! Pod Health and AI Event Analysis
//!
//! Turns raw KubeMon backend payloads into dashboard-ready data. Everything in
//! this module is a pure function over already-fetched JSON: no I/O, no
//! caching, no timers. Callers re-run the pipeline on every new snapshot.
//!
//! # Pipelines
//!
//! ## Pods (`GET /pods?cluster=&hours=`)
//! - [`reconcile`] keeps one snapshot per `namespace/name` (first one wins)
//! - [`compute_stats`] counts restarting / crash-looping pods and picks the top restarter
//! - [`filter_problematic`] narrows the set to pods worth surfacing
//!
//! ## AI analysis (`POST /events/analyze`)
//! - [`normalize`] flattens the category map into ordered [`CategoryEntry`] values,
//!   running each text field through [`sanitize`]
//! - [`overall_risk`] reduces the categories to one risk label
//!
//! # Example
//!
//! ```rust
//! use kubemon::analyzer::{PhraseTables, build_analysis_report, build_pod_report, parse_analysis, parse_pods};
//!
//! let pods = parse_pods(r#"[{"name":"api","namespace":"prod","status":"Running","restarts":3}]"#)?;
//! let report = build_pod_report(pods);
//! assert_eq!(report.stats.restart_pods, 1);
//!
//! let analysis = parse_analysis(r#"{"cluster":"prod","analysis":{"Warning":{"risk_level":"High"}}}"#)?;
//! let report = build_analysis_report(&analysis, &PhraseTables::canonical());
//! assert_eq!(report.overall_risk, "high");
//! # Ok::<(), kubemon::KubemonError>(())
//! ```

// ============================================================================
// Core modules
// ============================================================================

/// Core data types.
pub mod types;

/// Snapshot deduplication.
pub mod reconciler;

/// Aggregate pod statistics.
pub mod health_stats;

/// Problematic pod selection.
pub mod problem_filter;

/// Phrase substitution tables.
pub mod sanitizer;

/// AI analysis normalization.
pub mod normalizer;

/// Overall risk selection.
pub mod risk_ranker;

/// Payload-to-report pipelines.
pub mod report;

/// Output formatting (table, JSON, summary).
pub mod formatter;

// ============================================================================
// Re-exports
// ============================================================================

pub use types::{
    AnalysisResult, AnalysisValue, CategoryAnalysis, CategoryEntry, CategoryMap, HealthStats,
    PodRecord, PodStatus, RESERVED_ANALYSIS_KEYS, RiskLevel, parse_timestamp,
};

pub use reconciler::{ReconciledPodSet, reconcile};

pub use health_stats::compute_stats;

pub use problem_filter::{PodCondition, filter_problematic};

pub use sanitizer::{PhraseRule, PhraseRuleConfig, PhraseTables, sanitize};

pub use normalizer::{AnalysisMetadata, extract_metadata, normalize, normalize_with};

pub use risk_ranker::{overall_risk, overall_risk_level};

pub use report::{
    AnalysisReport, PodHealthReport, build_analysis_report, build_pod_report, parse_analysis,
    parse_pods,
};

pub use formatter::{OutputFormat, format_analysis_report_to_string, format_pod_report_to_string};
