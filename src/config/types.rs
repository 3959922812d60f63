use crate::analyzer::formatter::OutputFormat;
use crate::analyzer::sanitizer::{PhraseRuleConfig, PhraseTables};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub pods: PodsConfig,
    pub sanitizer: SanitizerConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            color: true,
        }
    }
}

/// Pod report configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodsConfig {
    /// List every reconciled pod instead of only problematic ones
    pub show_all: bool,
}

/// Phrase substitution configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerConfig {
    pub enabled: bool,
    /// Appended after the built-in rules of every field; patterns must be non-empty
    pub extra_rules: Vec<PhraseRuleConfig>,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            extra_rules: Vec::new(),
        }
    }
}

impl SanitizerConfig {
    /// Reject extra rules with an empty pattern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.extra_rules.iter().position(|rule| rule.pattern.is_empty()) {
            Some(index) => Err(ConfigError::ParsingFailed(format!(
                "sanitizer.extra_rules[{}]: pattern must not be empty",
                index
            ))),
            None => Ok(()),
        }
    }

    /// Phrase tables for normalization; empty when disabled.
    pub fn phrase_tables(&self) -> PhraseTables<'_> {
        if !self.enabled {
            return PhraseTables::none();
        }
        PhraseTables::canonical().with_extra_rules(self.extra_rules.iter().map(PhraseRuleConfig::as_rule))
    }
}
