//! Pipelines from raw backend payloads to display-ready reports.

use super::health_stats::compute_stats;
use super::normalizer::{AnalysisMetadata, extract_metadata, normalize_with};
use super::problem_filter::filter_problematic;
use super::reconciler::{ReconciledPodSet, reconcile};
use super::risk_ranker::overall_risk;
use super::sanitizer::PhraseTables;
use super::types::{AnalysisResult, CategoryEntry, HealthStats, PodRecord};
use crate::error::Result;
use serde::Serialize;

// ============================================================================
// Pods
// ============================================================================

/// Reconciled pods with their statistics and the problematic subset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PodHealthReport {
    pub pods: ReconciledPodSet,
    pub stats: HealthStats,
    pub problematic: Vec<PodRecord>,
}

impl PodHealthReport {
    pub fn has_problems(&self) -> bool {
        !self.problematic.is_empty()
    }
}

/// Decode a `/pods` payload. A JSON `null` is an empty list.
pub fn parse_pods(json: &str) -> Result<Vec<PodRecord>> {
    let pods: Option<Vec<PodRecord>> = serde_json::from_str(json)?;
    Ok(pods.unwrap_or_default())
}

/// Reconcile snapshots and derive stats over the full set.
pub fn build_pod_report<I>(pods: I) -> PodHealthReport
where
    I: IntoIterator<Item = PodRecord>,
{
    let reconciled = reconcile(pods);
    let stats = compute_stats(&reconciled);
    let problematic = filter_problematic(&reconciled);

    PodHealthReport {
        pods: reconciled,
        stats,
        problematic,
    }
}

// ============================================================================
// AI Analysis
// ============================================================================

/// Normalized AI analysis with its overall risk.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisReport {
    pub cluster: String,
    pub events_analyzed: u64,
    pub timeframe_hours: u64,
    pub timestamp: String,
    pub categories: Vec<CategoryEntry>,
    pub overall_risk: String,
    pub metadata: AnalysisMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Decode a `/events/analyze` payload.
pub fn parse_analysis(json: &str) -> Result<AnalysisResult> {
    let result: Option<AnalysisResult> = serde_json::from_str(json)?;
    Ok(result.unwrap_or_default())
}

/// Normalize categories, rank risk, and pull out display metadata.
pub fn build_analysis_report(result: &AnalysisResult, tables: &PhraseTables<'_>) -> AnalysisReport {
    let categories = normalize_with(&result.analysis, tables);
    let overall_risk = overall_risk(&categories);
    let metadata = extract_metadata(&result.analysis);

    AnalysisReport {
        cluster: result.cluster.clone(),
        events_analyzed: result.events_analyzed,
        timeframe_hours: result.timeframe_hours,
        timestamp: result.timestamp.clone(),
        categories,
        overall_risk,
        metadata,
        error: result.error.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::types::PodStatus;

    #[test]
    fn test_pod_pipeline_first_snapshot_wins() {
        let json = r#"[
            {"name": "api", "namespace": "prod", "status": "Running", "restarts": 0, "timestamp": "2025-06-01T10:00:00"},
            {"name": "api", "namespace": "prod", "status": "Running", "restarts": 2, "timestamp": "2025-06-01T09:55:00"},
            {"name": "api", "namespace": "prod", "status": "Running", "restarts": 0, "timestamp": "2025-06-01T09:50:00"}
        ]"#;

        let report = build_pod_report(parse_pods(json).unwrap());
        assert_eq!(report.stats.total_pods, 1);
        assert_eq!(report.pods.get("prod/api").unwrap().restarts, 0);
        assert_eq!(report.stats.restart_pods, 0);
        assert!(!report.has_problems());
    }

    #[test]
    fn test_null_pods_payload_is_empty() {
        let report = build_pod_report(parse_pods("null").unwrap());
        assert_eq!(report.stats.total_pods, 0);
        assert!(report.stats.top_restarting_pod.is_none());
    }

    #[test]
    fn test_stats_cover_full_set() {
        let report = build_pod_report(vec![
            PodRecord::new("ns", "a", PodStatus::Running, 0),
            PodRecord::new("ns", "b", PodStatus::CrashLoopBackOff, 6),
        ]);
        assert_eq!(report.stats.total_pods, 2);
        assert_eq!(report.problematic.len(), 1);
        assert_eq!(report.problematic[0].name, "b");
    }

    #[test]
    fn test_analysis_pipeline() {
        let json = r#"{
            "cluster": "prod",
            "events_analyzed": 42,
            "timeframe_hours": 24,
            "timestamp": "2025-06-01T10:00:00",
            "analysis": {
                "Normal": {"summary": "Routine scheduling", "risk_level": "Low"},
                "Warning": {"summary": "Crash loops in payments", "risk_level": "High"},
                "ai_model": "gpt-4",
                "tokens_used": 950
            }
        }"#;

        let result = parse_analysis(json).unwrap();
        let report = build_analysis_report(&result, &PhraseTables::canonical());
        assert_eq!(report.categories.len(), 2);
        assert_eq!(report.overall_risk, "high");
        assert_eq!(report.metadata.ai_model.as_deref(), Some("gpt-4"));
        assert_eq!(report.events_analyzed, 42);
    }

    #[test]
    fn test_error_shaped_analysis() {
        let json = r#"{"error": "Analysis failed: timeout", "cluster": "prod", "timestamp": "2025-06-01T10:00:00"}"#;
        let report = build_analysis_report(&parse_analysis(json).unwrap(), &PhraseTables::none());
        assert!(report.categories.is_empty());
        assert_eq!(report.overall_risk, "unknown");
        assert_eq!(report.error.as_deref(), Some("Analysis failed: timeout"));
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(parse_pods("{\"name\": 1}").is_err());
        assert!(parse_analysis("not json").is_err());
    }
}
