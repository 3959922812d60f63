//! Output formatting for KubeMon reports.
//!
//! Supports multiple output formats: table, JSON, and plain text summary.

use crate::analyzer::problem_filter::PodCondition;
use crate::analyzer::report::{AnalysisReport, PodHealthReport};
use crate::analyzer::types::{PodRecord, RiskLevel, parse_timestamp};
use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

// ============================================================================
// Output Format
// ============================================================================

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Boxed table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
    /// Plain text summary
    Summary,
}

impl OutputFormat {
    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "summary" => Some(Self::Summary),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Summary => "summary",
        }
    }
}

const RULE: &str =
    "═══════════════════════════════════════════════════════════════════════════════";
const DIVIDER: &str =
    "────────────────────────────────────────────────────────────────────────────";

/// Render an ISO-8601 timestamp for humans; unparsable input is returned as-is.
pub fn display_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => format_utc(ts),
        None => unparsed(raw),
    }
}

fn format_utc(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn unparsed(raw: &str) -> String {
    if raw.is_empty() {
        "-".to_string()
    } else {
        raw.to_string()
    }
}

// ============================================================================
// Pod Health Report
// ============================================================================

/// Format a pod health report to string.
///
/// With `show_all`, every reconciled pod is listed; otherwise only the
/// problematic ones.
pub fn format_pod_report_to_string(
    report: &PodHealthReport,
    format: OutputFormat,
    show_all: bool,
) -> String {
    match format {
        OutputFormat::Table => format_pod_table(report, show_all),
        OutputFormat::Json => to_json(report),
        OutputFormat::Summary => format_pod_summary(report),
    }
}

fn format_pod_table(report: &PodHealthReport, show_all: bool) -> String {
    let mut output = String::new();
    let stats = &report.stats;

    output.push_str(&format!("\n{}\n", RULE.bright_blue()));
    output.push_str(&format!(
        "{}\n",
        "☸ KUBERNETES POD HEALTH REPORT".bright_white().bold()
    ));
    output.push_str(&format!("{}\n\n", RULE.bright_blue()));

    output.push_str(&format!("{}\n", "┌─ Summary".bright_blue()));
    output.push_str(&format!(
        "│ {} {:>5}   {} {:>5}   {} {:>5}   {} {:>4}%\n",
        "Pods:".dimmed(),
        stats.total_pods.to_string().bright_white(),
        "Restarting:".dimmed(),
        count_colored(stats.restart_pods, |s| s.red()),
        "CrashLoopBackOff:".dimmed(),
        count_colored(stats.crash_loop_pods, |s| s.yellow()),
        "Health:".dimmed(),
        stats.health_percentage(),
    ));
    match &stats.top_restarting_pod {
        Some(top) => output.push_str(&format!(
            "│ {} {} ({} restarts)\n",
            "Top restarting:".dimmed(),
            top.key().bright_white(),
            top.restarts.to_string().red()
        )),
        None => output.push_str(&format!("│ {} -\n", "Top restarting:".dimmed())),
    }
    output.push_str(&format!("{}\n", "└─".bright_blue()));

    let listed: Vec<&PodRecord> = if show_all {
        report.pods.iter().collect()
    } else {
        report.problematic.iter().collect()
    };

    if listed.is_empty() {
        let message = if report.pods.is_empty() {
            "No pod data available."
        } else {
            "✅ No restarting or crash-looping pods."
        };
        output.push_str(&format!("\n{}\n", message.green()));
    } else {
        let title = if show_all { "┌─ Pods" } else { "┌─ Problematic Pods" };
        output.push_str(&format!("\n{}\n", title.bright_blue()));
        for pod in listed {
            output.push_str(&format_pod_line(pod));
        }
        output.push_str(&format!("{}\n", "└─".bright_blue()));
    }

    output.push_str(&format!("\n{}\n", RULE.bright_blue()));
    output
}

fn format_pod_line(pod: &PodRecord) -> String {
    let condition = PodCondition::of(pod);
    let (icon, status) = match condition {
        PodCondition::CrashLooping => ("🟠", pod.status.as_str().yellow()),
        PodCondition::Restarting => ("🔴", pod.status.as_str().red()),
        PodCondition::Quiet => ("⚪", pod.status.as_str().dimmed()),
    };

    format!(
        "│ {} {:<48} {:<18} {:>4} {}   {}\n",
        icon,
        pod.key().bright_white(),
        status,
        pod.restarts,
        "restarts".dimmed(),
        pod.observed_at()
            .map_or_else(|| unparsed(&pod.timestamp), format_utc)
            .dimmed()
    )
}

fn format_pod_summary(report: &PodHealthReport) -> String {
    let stats = &report.stats;
    let mut output = String::new();

    output.push_str("▶ POD HEALTH SUMMARY\n");
    output.push_str(DIVIDER);
    output.push('\n');
    output.push_str(&format!("│ Pods: {}\n", stats.total_pods));
    output.push_str(&format!("│ Restarting: {}\n", stats.restart_pods));
    output.push_str(&format!("│ CrashLoopBackOff: {}\n", stats.crash_loop_pods));
    output.push_str(&format!("│ Health: {}%\n", stats.health_percentage()));
    output.push_str(&format!(
        "│ Top restarting: {}\n",
        stats
            .top_restarting_pod
            .as_ref()
            .map(|p| format!("{} ({} restarts)", p.key(), p.restarts))
            .unwrap_or_else(|| "-".to_string())
    ));
    output.push_str(DIVIDER);
    output.push('\n');

    output
}

// ============================================================================
// AI Analysis Report
// ============================================================================

/// Format an analysis report to string.
pub fn format_analysis_report_to_string(report: &AnalysisReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => format_analysis_table(report),
        OutputFormat::Json => to_json(report),
        OutputFormat::Summary => format_analysis_summary(report),
    }
}

fn format_analysis_table(report: &AnalysisReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{}\n", RULE.bright_blue()));
    output.push_str(&format!(
        "{} {}\n",
        "🧠 AI EVENT ANALYSIS".bright_white().bold(),
        report.cluster.cyan()
    ));
    output.push_str(&format!("{}\n", RULE.bright_blue()));
    output.push_str(&format!(
        "{} events analyzed from last {} hours   {} {}\n",
        report.events_analyzed.to_string().bright_white(),
        report.timeframe_hours,
        risk_colored(&report.overall_risk).bold(),
        display_timestamp(&report.timestamp).dimmed()
    ));

    if let Some(error) = &report.error {
        output.push_str(&format!("\n{} {}\n", "⚠ Analysis error:".red().bold(), error));
    }

    if report.categories.is_empty() {
        output.push_str(&format!("\n{}\n", "No analysis categories returned.".dimmed()));
    }

    for category in &report.categories {
        output.push_str(&format!(
            "\n{} {}\n",
            format!("┌─ {}", category.category).bright_blue(),
            risk_colored(&category.risk_level)
        ));
        output.push_str(&format!("│ {}\n", "Summary:".dimmed()));
        output.push_str(&format!("│   {}\n", category.summary));
        output.push_str(&format!("│ {}\n", "Issues:".dimmed()));
        for issue in &category.issues {
            output.push_str(&format!("│   • {}\n", issue.red()));
        }
        output.push_str(&format!("│ {}\n", "Root cause:".dimmed()));
        output.push_str(&format!("│   {}\n", category.root_cause.purple()));
        output.push_str(&format!("│ {}\n", "Recommendations:".dimmed()));
        for rec in &category.recommendations {
            output.push_str(&format!("│   • {}\n", rec.green()));
        }
        output.push_str(&format!("{}\n", "└─".bright_blue()));
    }

    let metadata = &report.metadata;
    if metadata.ai_model.is_some() || metadata.tokens_used.is_some() {
        let mut parts = Vec::new();
        if let Some(model) = &metadata.ai_model {
            parts.push(format!("Model: {model}"));
        }
        if let Some(tokens) = metadata.tokens_used {
            parts.push(format!("Tokens: {tokens}"));
        }
        output.push_str(&format!("\n{}\n", parts.join("   ").dimmed()));
    }
    for (key, note) in &metadata.notes {
        output.push_str(&format!("{} {}\n", format!("{key}:").dimmed(), note));
    }

    output.push_str(&format!("\n{}\n", RULE.bright_blue()));
    output
}

fn format_analysis_summary(report: &AnalysisReport) -> String {
    let mut output = String::new();

    output.push_str("▶ AI EVENT ANALYSIS SUMMARY\n");
    output.push_str(DIVIDER);
    output.push('\n');
    output.push_str(&format!("│ Cluster: {}\n", report.cluster));
    output.push_str(&format!(
        "│ Events: {} (last {}h)\n",
        report.events_analyzed, report.timeframe_hours
    ));
    output.push_str(&format!(
        "│ Overall risk: {}\n",
        report.overall_risk.to_uppercase()
    ));
    for category in &report.categories {
        output.push_str(&format!(
            "│ {}: {} ({} issues)\n",
            category.category,
            category.risk_level.to_uppercase(),
            category.issues.len()
        ));
    }
    output.push_str(DIVIDER);
    output.push('\n');

    output
}

// ============================================================================
// Helpers
// ============================================================================

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

fn count_colored(count: usize, alert: impl Fn(&str) -> ColoredString) -> ColoredString {
    let text = count.to_string();
    if count > 0 { alert(&text) } else { text.green() }
}

fn risk_colored(label: &str) -> ColoredString {
    let badge = format!("{} RISK", label.to_uppercase());
    match RiskLevel::parse(label) {
        Some(RiskLevel::Critical) => badge.bright_red(),
        Some(RiskLevel::High) => badge.red(),
        Some(RiskLevel::Medium) => badge.yellow(),
        Some(RiskLevel::Low) => badge.green(),
        None => badge.dimmed(),
    }
}

// ============================================================================
// Tests
// ============================================================================
