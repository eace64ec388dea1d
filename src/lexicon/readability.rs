//! Flesch reading ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher = easier. Plain English lands around 60-70.

use super::syllables::SyllableDictionary;
use super::tokenize::{split_sentences, tokenize};
use crate::core::CollaboratorError;
use crate::io::traits::{CollaboratorResult, ReadabilityScorer, SyllableCounter};

#[derive(Debug, Clone, Default)]
pub struct FleschReadability {
    syllables: SyllableDictionary,
}

impl FleschReadability {
    pub fn new(syllables: SyllableDictionary) -> Self {
        Self { syllables }
    }
}

impl ReadabilityScorer for FleschReadability {
    fn reading_ease(&self, text: &str) -> CollaboratorResult<f64> {
        let words: Vec<String> = tokenize(text)
            .into_iter()
            .filter(|t| t.is_alpha)
            .map(|t| t.text)
            .collect();
        let sentences = split_sentences(text).len();
        if words.is_empty() || sentences == 0 {
            return Err(CollaboratorError::invalid("no words to score"));
        }

        let syllables: u32 = words
            .iter()
            .map(|w| self.syllables.syllable_count(w).unwrap_or(1))
            .sum();

        let words_per_sentence = words.len() as f64 / sentences as f64;
        let syllables_per_word = f64::from(syllables) / words.len() as f64;
        Ok(206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_text_is_easy() {
        let scorer = FleschReadability::default();
        let ease = scorer
            .reading_ease("The cat sat on the mat. The dog ran fast.")
            .unwrap();
        assert!(ease > 90.0, "ease was {}", ease);
    }

    #[test]
    fn test_dense_text_is_hard() {
        let scorer = FleschReadability::default();
        let text = "The implementation of comprehensive organizational restructuring \
                    necessitated interdepartmental communication protocols.";
        let ease = scorer.reading_ease(text).unwrap();
        assert!(ease < 30.0, "ease was {}", ease);
    }

    #[test]
    fn test_empty_text_is_invalid() {
        assert!(FleschReadability::default().reading_ease("").is_err());
    }
}
