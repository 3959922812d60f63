//! AI analysis normalization.
//!
//! The analysis payload is a loosely shaped map: category objects keyed by
//! event type, mixed with metadata scalars (`ai_model`, `tokens_used`) and
//! whatever else the AI service decided to return. Normalization keeps only
//! the category objects, in payload order, and fills every text field so the
//! renderer never has to deal with absence.

use super::sanitizer::{PhraseTables, sanitize};
use super::types::{AnalysisValue, CategoryAnalysis, CategoryEntry, CategoryMap, RiskLevel};
use serde::Serialize;

pub const DEFAULT_SUMMARY: &str = "No summary provided by analysis.";
pub const DEFAULT_ISSUE: &str = "No issues detected.";
pub const DEFAULT_ROOT_CAUSE: &str = "No root cause provided.";
pub const DEFAULT_RECOMMENDATION: &str = "No recommendations provided.";

/// Normalize categories using the canonical phrase tables.
pub fn normalize(analysis: &CategoryMap) -> Vec<CategoryEntry> {
    normalize_with(analysis, &PhraseTables::canonical())
}

/// Normalize categories using the given phrase tables.
pub fn normalize_with(analysis: &CategoryMap, tables: &PhraseTables<'_>) -> Vec<CategoryEntry> {
    let mut entries = Vec::new();

    for (key, value) in analysis.entries() {
        match value {
            AnalysisValue::Category(category) => {
                entries.push(normalize_category(key, category, tables));
            }
            AnalysisValue::Metadata(_) => {
                log::trace!("Skipping metadata key '{}'", key);
            }
            AnalysisValue::Other(raw) => {
                log::debug!("Skipping non-category key '{}' ({})", key, json_kind(raw));
            }
        }
    }

    log::debug!(
        "Normalized {} of {} analysis entries into categories",
        entries.len(),
        analysis.len()
    );

    entries
}

fn normalize_category(
    name: &str,
    category: &CategoryAnalysis,
    tables: &PhraseTables<'_>,
) -> CategoryEntry {
    CategoryEntry {
        category: name.to_string(),
        summary: text_or(category.summary.as_deref(), DEFAULT_SUMMARY, |s| {
            sanitize(s, &tables.summary)
        }),
        issues: list_or(category.issues.as_deref(), DEFAULT_ISSUE, |s| {
            sanitize(s, &tables.issue)
        }),
        root_cause: text_or(category.root_cause.as_deref(), DEFAULT_ROOT_CAUSE, |s| {
            sanitize(s, &tables.root_cause)
        }),
        recommendations: list_or(
            category.recommendations.as_deref(),
            DEFAULT_RECOMMENDATION,
            |s| sanitize(s, &tables.recommendation),
        ),
        risk_level: match category.risk_level.as_deref() {
            Some(level) if !level.is_empty() => level.to_lowercase(),
            _ => RiskLevel::UNKNOWN_LABEL.to_string(),
        },
    }
}

fn text_or(value: Option<&str>, default: &str, clean: impl Fn(&str) -> String) -> String {
    match value {
        Some(text) if !text.is_empty() => clean(text),
        _ => clean(default),
    }
}

fn list_or(
    value: Option<&[String]>,
    placeholder: &str,
    clean: impl Fn(&str) -> String,
) -> Vec<String> {
    match value {
        Some(items) if !items.is_empty() => items.iter().map(|item| clean(item.as_str())).collect(),
        _ => vec![clean(placeholder)],
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Display metadata carried alongside the categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u64>,
    /// Other scalar entries (e.g. an `error` string), in payload order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<(String, String)>,
}

impl AnalysisMetadata {
    pub fn is_empty(&self) -> bool {
        self.ai_model.is_none() && self.tokens_used.is_none() && self.notes.is_empty()
    }
}

/// Collect the non-category entries that are useful for display.
pub fn extract_metadata(analysis: &CategoryMap) -> AnalysisMetadata {
    let mut metadata = AnalysisMetadata::default();

    for (key, value) in analysis.entries() {
        match value {
            AnalysisValue::Metadata(raw) => match key.as_str() {
                "ai_model" => metadata.ai_model = scalar_text(raw),
                "tokens_used" => {
                    metadata.tokens_used = raw
                        .as_u64()
                        .or_else(|| raw.as_str().and_then(|s| s.parse().ok()));
                }
                _ => {}
            },
            AnalysisValue::Other(raw) => {
                if let Some(text) = scalar_text(raw) {
                    metadata.notes.push((key.clone(), text));
                }
            }
            AnalysisValue::Category(_) => {}
        }
    }

    metadata
}

fn scalar_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
