//! Output formatting for pod health and AI analysis reports.

mod output;

pub use output::{
    OutputFormat, display_timestamp, format_analysis_report_to_string, format_pod_report_to_string,
};
