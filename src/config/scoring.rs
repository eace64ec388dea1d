//! Score aggregation configuration
//!
//! Weights used to combine the four sub-scores into the overall score, and
//! the floor every sub-score is clamped to.

use serde::{Deserialize, Serialize};

/// Weights for combining sub-scores into the overall score.
///
/// Defaults are equal, which makes the overall score the unweighted mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight for the grammar score (0.0-1.0)
    #[serde(default = "default_grammar_weight")]
    pub grammar: f64,

    /// Weight for the vocabulary score (0.0-1.0)
    #[serde(default = "default_vocabulary_weight")]
    pub vocabulary: f64,

    /// Weight for the fluency score (0.0-1.0)
    #[serde(default = "default_fluency_weight")]
    pub fluency: f64,

    /// Weight for the coherence score (0.0-1.0)
    #[serde(default = "default_coherence_weight")]
    pub coherence: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            grammar: default_grammar_weight(),
            vocabulary: default_vocabulary_weight(),
            fluency: default_fluency_weight(),
            coherence: default_coherence_weight(),
        }
    }
}

impl ScoringWeights {
    // Pure function: Check if a weight is in valid range
    pub fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    // Pure function: Validate a single weight with name
    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} weight must be between 0.0 and 1.0", name))
        }
    }

    pub fn sum(&self) -> f64 {
        self.grammar + self.vocabulary + self.fluency + self.coherence
    }

    // Pure function: Collect all weight validations
    pub fn collect_weight_validations(&self) -> Vec<Result<(), String>> {
        vec![
            Self::validate_weight(self.grammar, "Grammar"),
            Self::validate_weight(self.vocabulary, "Vocabulary"),
            Self::validate_weight(self.fluency, "Fluency"),
            Self::validate_weight(self.coherence, "Coherence"),
        ]
    }

    /// Validate individual weights and that they sum to 1.0 (with small tolerance)
    pub fn validate(&self) -> Result<(), String> {
        for validation in self.collect_weight_validations() {
            validation?;
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > 0.001 {
            return Err(format!(
                "Scoring weights must sum to 1.0, but sum to {:.3}",
                sum
            ));
        }

        Ok(())
    }

    /// Normalize weights to ensure they sum to 1.0
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 && (sum - 1.0).abs() > 0.001 {
            self.grammar /= sum;
            self.vocabulary /= sum;
            self.fluency /= sum;
            self.coherence /= sum;
        }
    }

    /// Weighted mean of the four sub-scores.
    pub fn combine(&self, grammar: f64, vocabulary: f64, fluency: f64, coherence: f64) -> f64 {
        let sum = self.sum();
        if sum <= 0.0 {
            return (grammar + vocabulary + fluency + coherence) / 4.0;
        }
        (self.grammar * grammar
            + self.vocabulary * vocabulary
            + self.fluency * fluency
            + self.coherence * coherence)
            / sum
    }
}

/// Aggregation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringSettings {
    /// Lowest value any sub-score may take
    #[serde(default = "default_score_floor")]
    pub floor: f64,

    #[serde(default)]
    pub weights: ScoringWeights,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            floor: default_score_floor(),
            weights: ScoringWeights::default(),
        }
    }
}

impl ScoringSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.floor) {
            return Err(format!(
                "Score floor must be between 0.0 and 1.0, got {}",
                self.floor
            ));
        }
        self.weights.validate()
    }
}

pub fn default_grammar_weight() -> f64 {
    0.25
}

pub fn default_vocabulary_weight() -> f64 {
    0.25
}

pub fn default_fluency_weight() -> f64 {
    0.25
}

pub fn default_coherence_weight() -> f64 {
    0.25
}

pub fn default_score_floor() -> f64 {
    0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_valid() {
        assert!(ScoringWeights::default().validate().is_ok());
        assert!(ScoringSettings::default().validate().is_ok());
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let weights = ScoringWeights {
            grammar: 0.5,
            vocabulary: 0.5,
            fluency: 0.5,
            coherence: 0.5,
        };
        let err = weights.validate().unwrap_err();
        assert!(err.contains("sum to 2.000"));
    }

    #[test]
    fn test_out_of_range_weight_is_named() {
        let weights = ScoringWeights {
            grammar: 1.5,
            ..ScoringWeights::default()
        };
        assert_eq!(
            weights.validate().unwrap_err(),
            "Grammar weight must be between 0.0 and 1.0"
        );
    }

    #[test]
    fn test_normalize_rescales_weights() {
        let mut weights = ScoringWeights {
            grammar: 0.4,
            vocabulary: 0.4,
            fluency: 0.4,
            coherence: 0.8,
        };
        weights.normalize();
        assert!((weights.sum() - 1.0).abs() < 1e-9);
        assert!((weights.coherence - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_equal_weights_give_plain_mean() {
        let weights = ScoringWeights::default();
        let combined = weights.combine(0.2, 0.4, 0.6, 0.8);
        assert!((combined - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_floor_range_checked() {
        let settings = ScoringSettings {
            floor: -0.1,
            ..ScoringSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
