//! Per-module scoring configuration: normalization constants and the
//! defaults each module falls back to when a collaborator fails.

use super::thresholds::{CefrThresholds, ComplexityNormalizers};
use serde::{Deserialize, Serialize};

/// Lexical metrics engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalConfig {
    #[serde(default)]
    pub normalizers: ComplexityNormalizers,

    /// Words strictly above this complexity are reported as complex
    #[serde(default = "default_complex_word_threshold")]
    pub complex_word_threshold: f64,

    #[serde(default = "default_max_complex_words")]
    pub max_complex_words: usize,

    #[serde(default)]
    pub cefr: CefrThresholds,

    /// Rank assigned to words missing from the frequency table
    #[serde(default = "default_out_of_vocabulary_rank")]
    pub out_of_vocabulary_rank: u32,
}

impl Default for LexicalConfig {
    fn default() -> Self {
        Self {
            normalizers: ComplexityNormalizers::default(),
            complex_word_threshold: default_complex_word_threshold(),
            max_complex_words: default_max_complex_words(),
            cefr: CefrThresholds::default(),
            out_of_vocabulary_rank: default_out_of_vocabulary_rank(),
        }
    }
}

impl LexicalConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.normalizers.validate()?;
        self.cefr.validate()?;
        if !(0.0..=1.0).contains(&self.complex_word_threshold) {
            return Err(format!(
                "Complex word threshold must be between 0.0 and 1.0, got {}",
                self.complex_word_threshold
            ));
        }
        Ok(())
    }
}

/// How the grammar score is derived from the checker's issue count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrammarStrategy {
    /// Fixed score for clean text, otherwise issues per ten words
    #[default]
    IssueDensity,
    /// Issues per word blended 50/50 with the corrector length signal
    Blended,
}

/// Grammar scoring settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarConfig {
    #[serde(default)]
    pub strategy: GrammarStrategy,

    /// Score for text with no flagged issues under `issue_density`
    #[serde(default = "default_no_issue_score")]
    pub no_issue_score: f64,

    /// Words per tolerated issue under `issue_density`
    #[serde(default = "default_words_per_issue")]
    pub words_per_issue: f64,

    /// Score used when neither checker nor corrector answered
    #[serde(default = "default_fallback")]
    pub fallback_score: f64,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            strategy: GrammarStrategy::default(),
            no_issue_score: default_no_issue_score(),
            words_per_issue: default_words_per_issue(),
            fallback_score: default_fallback(),
        }
    }
}

impl GrammarConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.words_per_issue > 0.0) {
            return Err("Grammar words_per_issue must be positive".to_string());
        }
        validate_unit("Grammar no_issue_score", self.no_issue_score)?;
        validate_unit("Grammar fallback_score", self.fallback_score)
    }
}

/// Fluency scoring settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluencyConfig {
    /// Perplexity at which the perplexity component reaches 0.5
    #[serde(default = "default_perplexity_scale")]
    pub perplexity_scale: f64,

    #[serde(default = "default_fallback")]
    pub readability_fallback: f64,

    #[serde(default = "default_fallback")]
    pub perplexity_fallback: f64,
}

impl Default for FluencyConfig {
    fn default() -> Self {
        Self {
            perplexity_scale: default_perplexity_scale(),
            readability_fallback: default_fallback(),
            perplexity_fallback: default_fallback(),
        }
    }
}

impl FluencyConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.perplexity_scale > 0.0) {
            return Err("Fluency perplexity_scale must be positive".to_string());
        }
        validate_unit("Fluency readability_fallback", self.readability_fallback)?;
        validate_unit("Fluency perplexity_fallback", self.perplexity_fallback)
    }
}

/// Coherence scoring settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoherenceConfig {
    /// Score for text with fewer than two sentences
    #[serde(default = "default_single_sentence_score")]
    pub single_sentence_score: f64,

    #[serde(default = "default_fallback")]
    pub fallback_score: f64,
}

impl Default for CoherenceConfig {
    fn default() -> Self {
        Self {
            single_sentence_score: default_single_sentence_score(),
            fallback_score: default_fallback(),
        }
    }
}

impl CoherenceConfig {
    pub fn validate(&self) -> Result<(), String> {
        validate_unit("Coherence single_sentence_score", self.single_sentence_score)?;
        validate_unit("Coherence fallback_score", self.fallback_score)
    }
}

/// Feedback assembly settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Items listed per feedback line
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
        }
    }
}

/// Pipeline execution settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Evaluate the four scoring modules concurrently
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
        }
    }
}

fn validate_unit(name: &str, value: f64) -> Result<(), String> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{} must be between 0.0 and 1.0, got {}", name, value))
    }
}

pub fn default_complex_word_threshold() -> f64 {
    0.6
}

pub fn default_max_complex_words() -> usize {
    10
}

pub fn default_out_of_vocabulary_rank() -> u32 {
    10_001
}

pub fn default_no_issue_score() -> f64 {
    0.95
}

pub fn default_words_per_issue() -> f64 {
    10.0
}

pub fn default_perplexity_scale() -> f64 {
    1000.0
}

pub fn default_single_sentence_score() -> f64 {
    0.7
}

pub fn default_fallback() -> f64 {
    0.5
}

pub fn default_max_items() -> usize {
    3
}

pub fn default_parallel() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(LexicalConfig::default().validate().is_ok());
        assert!(GrammarConfig::default().validate().is_ok());
        assert!(FluencyConfig::default().validate().is_ok());
        assert!(CoherenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_grammar_strategy_deserializes_snake_case() {
        let config: GrammarConfig = toml::from_str("strategy = \"blended\"").unwrap();
        assert_eq!(config.strategy, GrammarStrategy::Blended);
        assert_eq!(config.no_issue_score, 0.95);
    }

    #[test]
    fn test_fallback_outside_unit_range_rejected() {
        let config = CoherenceConfig {
            fallback_score: 1.2,
            ..CoherenceConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("fallback_score"));
    }
}
