//! Handler for the `pods` command.

use super::utils::{read_payload, resolve_format};
use crate::analyzer::{build_pod_report, format_pod_report_to_string, parse_pods};
use crate::config::types::Config;
use crate::error::Result;
use std::path::Path;

/// Reconcile a `/pods` payload and render the health report.
pub fn handle_pods(
    path: Option<&Path>,
    format: Option<&str>,
    all: bool,
    config: &Config,
) -> Result<String> {
    let format = resolve_format(format, config.output.format)?;
    let payload = read_payload(path)?;
    let snapshots = parse_pods(&payload)?;
    log::info!("Read {} pod snapshots", snapshots.len());

    let report = build_pod_report(snapshots);
    let show_all = all || config.pods.show_all;

    Ok(format_pod_report_to_string(&report, format, show_all))
}
