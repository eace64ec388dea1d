//! Feature-hashing embedders.
//!
//! Offline stand-ins for neural embedding services: words and sentences are
//! projected into a fixed-size space by hashing features with xxh64. Two
//! independent feature sets give the two coherence signals.

use super::tokenize::tokenize;
use crate::core::CollaboratorError;
use crate::io::traits::{CollaboratorResult, SentenceEmbedder, WordEmbedder};
use xxhash_rust::xxh64::xxh64;

const DEFAULT_DIMENSIONS: usize = 256;
const WORD_SEED: u64 = 0x5eed_0001;
const UNIGRAM_SEED: u64 = 0x5eed_0002;
const BIGRAM_SEED: u64 = 0x5eed_0003;

fn add_hashed_feature(vector: &mut [f32], feature: &str, seed: u64, weight: f32) {
    let hash = xxh64(feature.as_bytes(), seed);
    let index = (hash % vector.len() as u64) as usize;
    let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
    vector[index] += sign * weight;
}

fn normalize_in_place(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        vector.iter_mut().for_each(|v| *v /= norm);
    }
}

/// Character-trigram word vectors; sentence vectors are their centroid.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimensions: usize,
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

impl HashingEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn vector_for(&self, word: &str) -> Option<Vec<f32>> {
        let lower = word.to_lowercase();
        if lower.is_empty() || !lower.chars().all(char::is_alphabetic) {
            return None;
        }

        let mut vector = vec![0.0f32; self.dimensions];
        let padded: Vec<char> = format!("<{}>", lower).chars().collect();
        for trigram in padded.windows(3) {
            let feature: String = trigram.iter().collect();
            add_hashed_feature(&mut vector, &feature, WORD_SEED, 1.0);
        }
        add_hashed_feature(&mut vector, &lower, WORD_SEED, 2.0);
        normalize_in_place(&mut vector);
        Some(vector)
    }
}

impl WordEmbedder for HashingEmbedder {
    fn word_vector(&self, word: &str) -> CollaboratorResult<Vec<f32>> {
        self.vector_for(word)
            .ok_or_else(|| CollaboratorError::MissingEntry(word.to_string()))
    }
}

impl SentenceEmbedder for HashingEmbedder {
    fn embed(&self, sentences: &[String]) -> CollaboratorResult<Vec<Vec<f32>>> {
        Ok(sentences
            .iter()
            .map(|sentence| {
                let mut centroid = vec![0.0f32; self.dimensions];
                for token in tokenize(sentence) {
                    if let Some(vector) = self.vector_for(&token.text) {
                        centroid.iter_mut().zip(&vector).for_each(|(c, v)| *c += v);
                    }
                }
                normalize_in_place(&mut centroid);
                centroid
            })
            .collect())
    }
}

/// Sentence vectors from hashed unigrams and adjacent-word bigrams.
///
/// Captures local word order, unlike [`HashingEmbedder`]'s bag of trigrams.
#[derive(Debug, Clone)]
pub struct ContextualHashingEmbedder {
    dimensions: usize,
}

impl Default for ContextualHashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

impl ContextualHashingEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn summary_vector(&self, sentence: &str) -> Vec<f32> {
        let words: Vec<String> = tokenize(sentence).into_iter().map(|t| t.text).collect();
        let mut vector = vec![0.0f32; self.dimensions];
        for word in &words {
            add_hashed_feature(&mut vector, word, UNIGRAM_SEED, 1.0);
        }
        for pair in words.windows(2) {
            let bigram = format!("{} {}", pair[0], pair[1]);
            add_hashed_feature(&mut vector, &bigram, BIGRAM_SEED, 0.5);
        }
        normalize_in_place(&mut vector);
        vector
    }
}

impl SentenceEmbedder for ContextualHashingEmbedder {
    fn embed(&self, sentences: &[String]) -> CollaboratorResult<Vec<Vec<f32>>> {
        Ok(sentences.iter().map(|s| self.summary_vector(s)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::cosine_similarity;

    #[test]
    fn test_word_vectors_are_deterministic_and_unit_length() {
        let embedder = HashingEmbedder::default();
        let a = embedder.word_vector("language").unwrap();
        let b = embedder.word_vector("Language").unwrap();
        assert_eq!(a, b);
        let norm: f32 = a.iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_non_alpha_word_is_missing() {
        let embedder = HashingEmbedder::default();
        assert!(matches!(
            embedder.word_vector("42"),
            Err(CollaboratorError::MissingEntry(_))
        ));
    }

    #[test]
    fn test_related_spellings_are_closer() {
        let embedder = HashingEmbedder::new(4096);
        let run = embedder.word_vector("running").unwrap();
        let runner = embedder.word_vector("runner").unwrap();
        let zebra = embedder.word_vector("zebra").unwrap();
        let related = cosine_similarity(&run, &runner).unwrap();
        let unrelated = cosine_similarity(&run, &zebra).unwrap();
        assert!(related > unrelated);
    }

    #[test]
    fn test_sentence_embeddings_one_per_sentence() {
        let sentences = vec!["The cat sat.".to_string(), "It purred.".to_string()];
        let primary = HashingEmbedder::default().embed(&sentences).unwrap();
        let contextual = ContextualHashingEmbedder::default().embed(&sentences).unwrap();
        assert_eq!(primary.len(), 2);
        assert_eq!(contextual.len(), 2);
        assert_eq!(primary[0].len(), 256);
    }

    #[test]
    fn test_contextual_embedding_identical_sentences() {
        let embedder = ContextualHashingEmbedder::new(64);
        let vectors = embedder
            .embed(&["a b c".to_string(), "a b c".to_string()])
            .unwrap();
        let similarity = cosine_similarity(&vectors[0], &vectors[1]).unwrap();
        assert!((similarity - 1.0).abs() < 1e-6);
    }
}
