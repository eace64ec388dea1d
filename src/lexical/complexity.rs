//! Per-word complexity.
//!
//! Complexity is the unweighted mean of four factors, each scaled to [0, 1]:
//! length, syllables, frequency rank (rarer = harder) and sense count.

use super::LexicalResources;
use crate::config::ComplexityNormalizers;
use crate::core::CollaboratorError;

/// Raw lexical features of one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordFeatures {
    /// Characters
    pub length: usize,
    pub syllables: u32,
    /// 1 = most frequent
    pub frequency_rank: u32,
    pub senses: u32,
}

/// Look up every feature of `word`, naming the collaborator on failure.
pub fn word_features(
    word: &str,
    resources: &LexicalResources<'_>,
) -> Result<WordFeatures, (&'static str, CollaboratorError)> {
    let frequency_rank = resources
        .frequency
        .frequency_rank(word)
        .map_err(|e| ("frequency ranker", e))?;
    let syllables = resources
        .syllables
        .syllable_count(word)
        .map_err(|e| ("syllable counter", e))?;
    let senses = resources
        .senses
        .sense_count(word)
        .map_err(|e| ("sense inventory", e))?;

    Ok(WordFeatures {
        length: word.chars().count(),
        syllables,
        frequency_rank,
        senses,
    })
}

fn scaled(value: f64, scale: f64) -> f64 {
    (value / scale).clamp(0.0, 1.0)
}

/// Mean of the four normalized factors, in [0, 1].
pub fn word_complexity(features: &WordFeatures, normalizers: &ComplexityNormalizers) -> f64 {
    let length_score = scaled(features.length as f64, normalizers.length);
    let syllable_score = scaled(f64::from(features.syllables), normalizers.syllables);
    let frequency_score = scaled(f64::from(features.frequency_rank), normalizers.frequency_rank);
    let semantic_score = scaled(f64::from(features.senses), normalizers.senses);

    (length_score + syllable_score + frequency_score + semantic_score) / 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(length: usize, syllables: u32, frequency_rank: u32, senses: u32) -> WordFeatures {
        WordFeatures {
            length,
            syllables,
            frequency_rank,
            senses,
        }
    }

    #[test]
    fn test_complexity_is_mean_of_factors() {
        let normalizers = ComplexityNormalizers::default();
        // 6/12, 1/5, 5000/10000, 2/10
        let complexity = word_complexity(&features(6, 1, 5000, 2), &normalizers);
        assert!((complexity - (0.5 + 0.2 + 0.5 + 0.2) / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_each_factor_saturates_at_one() {
        let normalizers = ComplexityNormalizers::default();
        let complexity = word_complexity(&features(40, 12, 90_000, 75), &normalizers);
        assert_eq!(complexity, 1.0);
    }

    #[test]
    fn test_minimal_word() {
        let normalizers = ComplexityNormalizers::default();
        let complexity = word_complexity(&features(0, 0, 0, 0), &normalizers);
        assert_eq!(complexity, 0.0);
    }
}
