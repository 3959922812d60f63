//! Fixed phrase substitution for AI analysis text.
//!
//! The dashboard translates a handful of recurring English phrases from the
//! AI service into Turkish. Each free-text field has its own table; rules run
//! in table order and each replaces only the first literal match.

use serde::{Deserialize, Serialize};

/// A literal `pattern -> replacement` substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseRule<'a> {
    pub pattern: &'a str,
    pub replacement: &'a str,
}

impl<'a> PhraseRule<'a> {
    pub const fn new(pattern: &'a str, replacement: &'a str) -> Self {
        Self {
            pattern,
            replacement,
        }
    }
}

/// Owned phrase rule, as written in `.kubemon.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseRuleConfig {
    pub pattern: String,
    pub replacement: String,
}

impl PhraseRuleConfig {
    pub fn as_rule(&self) -> PhraseRule<'_> {
        PhraseRule::new(&self.pattern, &self.replacement)
    }
}

/// Apply each rule once, in order. Empty patterns are skipped.
pub fn sanitize(text: &str, rules: &[PhraseRule<'_>]) -> String {
    let mut out = text.to_string();
    for rule in rules {
        if rule.pattern.is_empty() || !out.contains(rule.pattern) {
            continue;
        }
        log::trace!("Phrase substitution: {:?}", rule.pattern);
        out = out.replacen(rule.pattern, rule.replacement, 1);
    }
    out
}

// ============================================================================
// Canonical Tables
// ============================================================================

const HPA_NO_MATCH: PhraseRule<'static> = PhraseRule::new(
    "HorizontalPodAutoscaler failing to get scale due to no matches for kind 'Deployment' in group 'extensions'",
    "HorizontalPodAutoscaler, 'extensions' grubunda 'Deployment' türüyle eşleşme bulunamadığı için ölçek bilgisini alamıyor.",
);

const HPA_VERSION_MISMATCH: PhraseRule<'static> = PhraseRule::new(
    "The issue is likely due to a misconfiguration or version incompatibility between the HorizontalPodAutoscaler and the Deployment resources.",
    "Sorunun nedeni büyük olasılıkla HorizontalPodAutoscaler ile Deployment kaynakları arasında bir yanlış yapılandırma veya sürüm uyumsuzluğudur.",
);

/// Rules applied to category summaries.
pub const SUMMARY_RULES: &[PhraseRule<'static>] = &[HPA_NO_MATCH, HPA_VERSION_MISMATCH];

/// Rules applied to each issue line.
pub const ISSUE_RULES: &[PhraseRule<'static>] = &[HPA_NO_MATCH];

/// Rules applied to root causes.
pub const ROOT_CAUSE_RULES: &[PhraseRule<'static>] = &[HPA_VERSION_MISMATCH];

/// Rules applied to each recommendation line.
pub const RECOMMENDATION_RULES: &[PhraseRule<'static>] = &[
    PhraseRule::new(
        "Check the compatibility between the HorizontalPodAutoscaler and Deployment resources",
        "HorizontalPodAutoscaler ile Deployment kaynaklarının uyumluluğunu kontrol edin",
    ),
    PhraseRule::new(
        "Ensure the correct API versions are being used for both resources",
        "Her iki kaynak için de doğru API versiyonlarının kullanıldığından emin olun",
    ),
    PhraseRule::new(
        "Review and update the configurations to match the expected resource types",
        "Yapılandırmaları gözden geçirip beklenen kaynak tiplerine uygun şekilde güncelleyin",
    ),
];

/// Per-field rule tables used during normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseTables<'a> {
    pub summary: Vec<PhraseRule<'a>>,
    pub issue: Vec<PhraseRule<'a>>,
    pub root_cause: Vec<PhraseRule<'a>>,
    pub recommendation: Vec<PhraseRule<'a>>,
}

impl PhraseTables<'static> {
    /// The built-in translation tables.
    pub fn canonical() -> Self {
        Self {
            summary: SUMMARY_RULES.to_vec(),
            issue: ISSUE_RULES.to_vec(),
            root_cause: ROOT_CAUSE_RULES.to_vec(),
            recommendation: RECOMMENDATION_RULES.to_vec(),
        }
    }

    /// No substitutions at all.
    pub fn none() -> Self {
        Self::default()
    }
}

impl<'a> PhraseTables<'a> {
    /// Append `rules` after the existing rules of every field.
    pub fn with_extra_rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = PhraseRule<'a>>,
    {
        for rule in rules {
            self.summary.push(rule);
            self.issue.push(rule);
            self.root_cause.push(rule);
            self.recommendation.push(rule);
        }
        self
    }
}
