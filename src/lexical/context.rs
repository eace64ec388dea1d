//! Context appropriateness: how close each word sits to its sentence centroid.

use super::LookupFailures;
use crate::common::{cosine_similarity, mean_vector};
use crate::core::CollaboratorError;
use crate::io::WordEmbedder;
use crate::lexicon::{split_sentences, tokenize};

const COLLABORATOR: &str = "word embedder";

/// Mean cosine similarity between each embeddable word and the mean vector
/// of its sentence, clamped to [0, 1].
///
/// Sentences without embeddable words contribute nothing; 0.0 when no
/// similarity could be computed at all.
pub(crate) fn context_appropriateness_with(
    text: &str,
    embedder: &dyn WordEmbedder,
    failures: &mut LookupFailures,
) -> f64 {
    let mut similarities = Vec::new();

    for sentence in split_sentences(text) {
        let vectors: Vec<Vec<f32>> = tokenize(&sentence)
            .into_iter()
            .filter(|token| token.is_alpha)
            .filter_map(|token| match embedder.word_vector(&token.text) {
                Ok(vector) if !vector.is_empty() => Some(vector),
                Ok(_) => None,
                Err(err) => {
                    failures.record(COLLABORATOR, err);
                    None
                }
            })
            .collect();

        if vectors.is_empty() {
            continue;
        }

        let Some(centroid) = mean_vector(&vectors) else {
            failures.record(
                COLLABORATOR,
                CollaboratorError::invalid("word vectors of differing dimensions"),
            );
            continue;
        };

        similarities.extend(
            vectors
                .iter()
                .filter_map(|vector| cosine_similarity(vector, &centroid)),
        );
    }

    if similarities.is_empty() {
        return 0.0;
    }

    let mean = similarities.iter().sum::<f64>() / similarities.len() as f64;
    mean.clamp(0.0, 1.0)
}

/// Context appropriateness of `text`, ignoring lookup failures.
pub fn context_appropriateness(text: &str, embedder: &dyn WordEmbedder) -> f64 {
    let mut failures = LookupFailures::default();
    context_appropriateness_with(text, embedder, &mut failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::CollaboratorResult;

    struct ConstantEmbedder;

    impl WordEmbedder for ConstantEmbedder {
        fn word_vector(&self, _word: &str) -> CollaboratorResult<Vec<f32>> {
            Ok(vec![1.0, 0.0, 0.0])
        }
    }

    struct BrokenEmbedder;

    impl WordEmbedder for BrokenEmbedder {
        fn word_vector(&self, _word: &str) -> CollaboratorResult<Vec<f32>> {
            Err(CollaboratorError::unavailable("model not loaded"))
        }
    }

    #[test]
    fn test_identical_vectors_are_fully_appropriate() {
        let score = context_appropriateness("Dogs bark loudly. Cats purr.", &ConstantEmbedder);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_words_scores_zero() {
        assert_eq!(context_appropriateness("", &ConstantEmbedder), 0.0);
        assert_eq!(context_appropriateness("123 456", &ConstantEmbedder), 0.0);
    }

    #[test]
    fn test_embedder_failure_is_recorded() {
        let mut failures = LookupFailures::default();
        let score = context_appropriateness_with("Dogs bark.", &BrokenEmbedder, &mut failures);
        assert_eq!(score, 0.0);
        assert_eq!(failures.into_degradations().len(), 1);
    }
}
