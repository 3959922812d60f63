//! Core types for pod health reconciliation and AI event analysis.
//!
//! These types mirror the JSON payloads returned by the KubeMon backend
//! (`GET /pods`, `POST /events/analyze`) and the view-models derived from them.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// Pod Status
// ============================================================================

/// Pod status as reported by the backend.
///
/// The backend reports `CrashLoopBackOff` for crash-looping containers and
/// otherwise forwards the pod phase, so phases outside the four tracked ones
/// (`Succeeded`, `Unknown`, ...) land in [`PodStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PodStatus {
    Running,
    CrashLoopBackOff,
    Pending,
    Failed,
    #[serde(other)]
    Unknown,
}

impl PodStatus {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::CrashLoopBackOff => "CrashLoopBackOff",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Pod Record
// ============================================================================

/// One polled snapshot of a pod.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodRecord {
    pub name: String,
    pub namespace: String,
    pub status: PodStatus,
    pub restarts: u32,
    /// ISO-8601 observation time
    #[serde(default)]
    pub timestamp: String,
}

impl PodRecord {
    /// Create a pod snapshot with an empty timestamp.
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        status: PodStatus,
        restarts: u32,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            status,
            restarts,
            timestamp: String::new(),
        }
    }

    /// Set the observation timestamp.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Identity key: `namespace/name`.
    pub fn key(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }

    /// Observation time, if the timestamp parses.
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 and the naive `YYYY-MM-DDTHH:MM:SS[.ffffff]` form the
/// backend emits from `datetime.utcnow().isoformat()`; naive values are UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

// ============================================================================
// Health Stats
// ============================================================================

/// Aggregate counts over a reconciled pod set.
///
/// `restart_pods` and `crash_loop_pods` may overlap and need not sum to
/// `total_pods`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStats {
    pub total_pods: usize,
    /// Pods with at least one restart (shown as "healthy/restart" on the dashboard)
    pub restart_pods: usize,
    pub crash_loop_pods: usize,
    pub top_restarting_pod: Option<PodRecord>,
}

impl HealthStats {
    /// Share of pods with restarts, rounded to a whole percent. `0` when empty.
    pub fn health_percentage(&self) -> u32 {
        if self.total_pods == 0 {
            return 0;
        }
        ((self.restart_pods as f64 / self.total_pods as f64) * 100.0).round() as u32
    }
}

// ============================================================================
// Risk Level
// ============================================================================

/// Risk levels assigned by the AI analysis.
///
/// Ordered from most severe to least severe:
/// `Critical > High > Medium > Low`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Rank given to labels that are not a known risk level; worse than every known rank.
    pub const UNRANKED: u8 = u8::MAX;

    /// Label reported when no known risk level is present.
    pub const UNKNOWN_LABEL: &'static str = "unknown";

    /// Parse a risk level from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "critical" => Some(Self::Critical),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Severity rank, `0` being the most severe.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Rank of an arbitrary label; unknown labels get [`RiskLevel::UNRANKED`].
    pub fn rank_of(label: &str) -> u8 {
        Self::parse(label).map_or(Self::UNRANKED, |level| level.rank())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// AI Analysis Payload
// ============================================================================

/// Keys in an analysis map that carry metadata rather than a category.
pub const RESERVED_ANALYSIS_KEYS: &[&str] = &["ai_model", "tokens_used"];

/// Result of `POST /events/analyze`.
///
/// Every field tolerates absence: the backend omits the counters when no
/// events were found and returns `{error, cluster, timestamp}` on failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub cluster: String,
    #[serde(default)]
    pub events_analyzed: u64,
    #[serde(default)]
    pub timeframe_hours: u64,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub analysis: CategoryMap,
    #[serde(default)]
    pub error: Option<String>,
}

/// Free-text sections of one analysis category, as sent by the AI service.
///
/// Fields with the wrong JSON type are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryAnalysis {
    pub summary: Option<String>,
    pub issues: Option<Vec<String>>,
    pub root_cause: Option<String>,
    pub recommendations: Option<Vec<String>>,
    pub risk_level: Option<String>,
}

impl CategoryAnalysis {
    /// Read the known fields out of a JSON object.
    pub fn from_object(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let text = |field: &str| object.get(field).and_then(|v| v.as_str()).map(str::to_string);
        let list = |field: &str| {
            object.get(field).and_then(|v| v.as_array()).map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect::<Vec<_>>()
            })
        };

        Self {
            summary: text("summary"),
            issues: list("issues"),
            root_cause: text("root_cause"),
            recommendations: list("recommendations"),
            risk_level: text("risk_level"),
        }
    }
}

/// One value of an analysis map, classified once when the payload is read.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisValue {
    /// A non-null, non-array object under a non-reserved key
    Category(CategoryAnalysis),
    /// Any value under a reserved metadata key
    Metadata(serde_json::Value),
    /// Scalars, arrays and nulls under other keys
    Other(serde_json::Value),
}

impl AnalysisValue {
    /// Classify a raw JSON value by its key and shape.
    pub fn classify(key: &str, value: serde_json::Value) -> Self {
        if RESERVED_ANALYSIS_KEYS.contains(&key) {
            return Self::Metadata(value);
        }
        match value {
            serde_json::Value::Object(ref object) => {
                Self::Category(CategoryAnalysis::from_object(object))
            }
            other => Self::Other(other),
        }
    }

    pub fn is_category(&self) -> bool {
        matches!(self, Self::Category(_))
    }
}

/// Ordered mapping from category name to analysis value.
///
/// Order is the key order of the source JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryMap {
    entries: Vec<(String, AnalysisValue)>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON value. Anything other than an object yields an empty map.
    pub fn from_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(object) => object.into_iter().collect(),
            _ => Self::default(),
        }
    }

    /// Append an entry, classifying its value.
    pub fn push(&mut self, key: impl Into<String>, value: serde_json::Value) {
        let key = key.into();
        let value = AnalysisValue::classify(&key, value);
        self.entries.push((key, value));
    }

    pub fn entries(&self) -> &[(String, AnalysisValue)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, serde_json::Value)> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.push(key, value);
        }
        map
    }
}

impl<'de> Deserialize<'de> for CategoryMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_value(value))
    }
}

// ============================================================================
// Normalized Category
// ============================================================================

/// A normalized analysis category with every text field filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEntry {
    pub category: String,
    pub summary: String,
    pub issues: Vec<String>,
    pub root_cause: String,
    pub recommendations: Vec<String>,
    /// Lower-cased risk label, `"unknown"` when absent
    pub risk_level: String,
}

impl CategoryEntry {
    /// Parsed risk level, if the label is a known one.
    pub fn risk(&self) -> Option<RiskLevel> {
        RiskLevel::parse(&self.risk_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pod_key() {
        let pod = PodRecord::new("prod", "api-7f9", PodStatus::Running, 0);
        assert_eq!(pod.key(), "prod/api-7f9");
    }

    #[test]
    fn test_pod_status_tolerates_unknown_phase() {
        let pod: PodRecord = serde_json::from_value(json!({
            "name": "job-1",
            "namespace": "batch",
            "status": "Succeeded",
            "restarts": 0
        }))
        .unwrap();
        assert_eq!(pod.status, PodStatus::Unknown);
        assert!(pod.timestamp.is_empty());
    }

    #[test]
    fn test_parse_timestamp_forms() {
        assert!(parse_timestamp("2025-06-01T10:15:30Z").is_some());
        assert!(parse_timestamp("2025-06-01T10:15:30.123456").is_some());
        assert!(parse_timestamp("2025-06-01 10:15:30").is_some());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());

        let naive = parse_timestamp("2025-06-01T10:15:30").unwrap();
        let zoned = parse_timestamp("2025-06-01T12:15:30+02:00").unwrap();
        assert_eq!(naive, zoned);
    }

    #[test]
    fn test_observed_at() {
        let pod = PodRecord::new("prod", "api", PodStatus::Running, 0);
        assert!(pod.observed_at().is_none());

        let pod = pod.with_timestamp("2025-06-01T10:15:30.5");
        assert_eq!(pod.observed_at(), parse_timestamp("2025-06-01T10:15:30.5Z"));
        assert!(pod.observed_at().is_some());
    }

    #[test]
    fn test_health_percentage() {
        let stats = HealthStats {
            total_pods: 3,
            restart_pods: 2,
            ..Default::default()
        };
        assert_eq!(stats.health_percentage(), 67);
        assert_eq!(HealthStats::default().health_percentage(), 0);
    }

    #[test]
    fn test_risk_level_rank_table() {
        assert_eq!(RiskLevel::parse("CRITICAL"), Some(RiskLevel::Critical));
        assert!(RiskLevel::rank_of("critical") < RiskLevel::rank_of("low"));
        assert_eq!(RiskLevel::rank_of("bogus"), RiskLevel::UNRANKED);
        assert!(RiskLevel::rank_of("low") < RiskLevel::rank_of("bogus"));
    }

    #[test]
    fn test_classify_values() {
        assert!(AnalysisValue::classify("Warning", json!({"summary": "x"})).is_category());
        assert!(matches!(
            AnalysisValue::classify("ai_model", json!({"name": "gpt-4"})),
            AnalysisValue::Metadata(_)
        ));
        assert!(matches!(
            AnalysisValue::classify("Normal", json!(["a", "b"])),
            AnalysisValue::Other(_)
        ));
        assert!(matches!(
            AnalysisValue::classify("Normal", serde_json::Value::Null),
            AnalysisValue::Other(_)
        ));
    }

    #[test]
    fn test_category_analysis_ignores_mistyped_fields() {
        let value = json!({
            "summary": 42,
            "issues": ["disk pressure", 7, null],
            "root_cause": "node full",
            "recommendations": "not a list",
        });
        let analysis = CategoryAnalysis::from_object(value.as_object().unwrap());
        assert_eq!(analysis.summary, None);
        assert_eq!(analysis.issues, Some(vec!["disk pressure".to_string()]));
        assert_eq!(analysis.root_cause.as_deref(), Some("node full"));
        assert_eq!(analysis.recommendations, None);
        assert_eq!(analysis.risk_level, None);
    }

    #[test]
    fn test_category_map_preserves_key_order() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{
                "cluster": "prod",
                "analysis": {
                    "Warning": {"risk_level": "high"},
                    "ai_model": "gpt-4",
                    "Normal": {"risk_level": "low"},
                    "tokens_used": 812
                }
            }"#,
        )
        .unwrap();

        let keys: Vec<&str> = result
            .analysis
            .entries()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, vec!["Warning", "ai_model", "Normal", "tokens_used"]);
        assert_eq!(result.events_analyzed, 0);
    }

    #[test]
    fn test_non_object_analysis_is_empty() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"cluster": "prod", "analysis": ["oops"]}"#).unwrap();
        assert!(result.analysis.is_empty());
    }
}
