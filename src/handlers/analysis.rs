//! Handler for the `analysis` command.

use super::utils::{read_payload, resolve_format};
use crate::analyzer::{
    PhraseTables, build_analysis_report, format_analysis_report_to_string, parse_analysis,
};
use crate::config::types::Config;
use crate::error::Result;
use std::path::Path;

/// Normalize an `/events/analyze` payload and render its categories.
pub fn handle_analysis(
    path: Option<&Path>,
    format: Option<&str>,
    raw: bool,
    config: &Config,
) -> Result<String> {
    let format = resolve_format(format, config.output.format)?;
    let payload = read_payload(path)?;
    let result = parse_analysis(&payload)?;

    if let Some(error) = &result.error {
        log::warn!("Backend reported analysis error: {}", error);
    }

    let tables = if raw {
        PhraseTables::none()
    } else {
        config.sanitizer.phrase_tables()
    };
    let report = build_analysis_report(&result, &tables);
    log::info!(
        "Analysis for '{}': {} categories, overall risk {}",
        report.cluster,
        report.categories.len(),
        report.overall_risk
    );

    Ok(format_analysis_report_to_string(&report, format))
}
