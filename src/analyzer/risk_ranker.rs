//! Overall risk of an analysis: the most severe known risk level among its categories.

use super::types::{CategoryEntry, RiskLevel};

/// Most severe recognized risk level, or `None` when no entry has one.
///
/// Labels outside `critical/high/medium/low` rank below `low` and can never
/// win over a recognized label.
pub fn overall_risk_level(entries: &[CategoryEntry]) -> Option<RiskLevel> {
    entries
        .iter()
        .map(|entry| (RiskLevel::rank_of(&entry.risk_level), entry))
        .filter(|(rank, _)| *rank != RiskLevel::UNRANKED)
        .min_by_key(|(rank, _)| *rank)
        .and_then(|(_, entry)| entry.risk())
}

/// Overall risk label; `"unknown"` when nothing is recognized.
pub fn overall_risk(entries: &[CategoryEntry]) -> String {
    overall_risk_level(entries)
        .map(|level| level.as_str())
        .unwrap_or(RiskLevel::UNKNOWN_LABEL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(risk: &str) -> CategoryEntry {
        CategoryEntry {
            category: format!("cat-{risk}"),
            summary: String::new(),
            issues: vec![],
            root_cause: String::new(),
            recommendations: vec![],
            risk_level: risk.to_string(),
        }
    }

    #[test]
    fn test_empty_is_unknown() {
        assert_eq!(overall_risk(&[]), "unknown");
        assert_eq!(overall_risk_level(&[]), None);
    }

    #[test]
    fn test_picks_most_severe() {
        let entries = [entry("medium"), entry("critical"), entry("low")];
        assert_eq!(overall_risk(&entries), "critical");
    }

    #[test]
    fn test_unrecognized_never_outranks_known() {
        assert_eq!(overall_risk(&[entry("bogus"), entry("low")]), "low");
        assert_eq!(overall_risk(&[entry("low"), entry("unknown")]), "low");
    }

    #[test]
    fn test_all_unrecognized_is_unknown() {
        assert_eq!(overall_risk(&[entry("bogus"), entry("unknown")]), "unknown");
    }

    #[test]
    fn test_ties_report_label() {
        let entries = [entry("high"), entry("medium"), entry("high")];
        assert_eq!(overall_risk_level(&entries), Some(RiskLevel::High));
    }
}
