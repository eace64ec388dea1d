//! Configuration validation with error accumulation.
//!
//! Every section is checked and all failures are returned together, each
//! prefixed with the section name, so a user sees every problem in one run.

use super::CommscoreConfig;
use crate::core::{Error, Result};

/// A validation failure tied to a config section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub section: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.section, self.message)
    }
}

/// Pure function: collect the validation result of every section
pub fn collect_section_validations(
    config: &CommscoreConfig,
) -> Vec<(&'static str, std::result::Result<(), String>)> {
    vec![
        ("lexical", config.lexical.validate()),
        ("grammar", config.grammar.validate()),
        ("fluency", config.fluency.validate()),
        ("coherence", config.coherence.validate()),
        ("scoring", config.scoring.validate()),
        ("labels", config.labels.validate()),
    ]
}

/// Validate the whole configuration, accumulating every issue.
pub fn validate_config(config: &CommscoreConfig) -> std::result::Result<(), Vec<ConfigIssue>> {
    let issues: Vec<ConfigIssue> = collect_section_validations(config)
        .into_iter()
        .filter_map(|(section, result)| {
            result.err().map(|message| ConfigIssue { section, message })
        })
        .collect();

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// `validate_config` mapped onto the crate error type.
pub fn validate_config_result(config: &CommscoreConfig) -> Result<()> {
    validate_config(config).map_err(|issues| {
        let joined = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Error::Validation(joined)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LabelThresholds;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&CommscoreConfig::default()).is_ok());
    }

    #[test]
    fn test_all_issues_are_accumulated() {
        let mut config = CommscoreConfig::default();
        config.labels = LabelThresholds {
            excellent: 0.4,
            good: 0.6,
        };
        config.scoring.weights.grammar = 0.9;
        config.lexical.cefr.c1 = 10;

        let issues = validate_config(&config).unwrap_err();
        let sections: Vec<_> = issues.iter().map(|issue| issue.section).collect();
        assert_eq!(sections, vec!["lexical", "scoring", "labels"]);
    }

    #[test]
    fn test_result_wrapper_joins_messages() {
        let mut config = CommscoreConfig::default();
        config.scoring.floor = 2.0;
        let err = validate_config_result(&config).unwrap_err();
        assert!(err.to_string().starts_with("Validation error: scoring: Score floor"));
    }
}
