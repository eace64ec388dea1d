//! Unigram language model over a frequency ranking.

use super::frequency::FrequencyTable;
use super::tokenize::tokenize;
use crate::core::CollaboratorError;
use crate::io::traits::{CollaboratorResult, PerplexityScorer};
use std::sync::Arc;

/// Zipf-distributed unigram model: `p(rank r) = 1 / (r * H)`.
///
/// `H` is the harmonic number over the vocabulary plus one slot shared by
/// all out-of-vocabulary words.
#[derive(Debug, Clone)]
pub struct ZipfLanguageModel {
    table: Arc<FrequencyTable>,
    harmonic: f64,
}

impl ZipfLanguageModel {
    pub fn new(table: Arc<FrequencyTable>) -> Self {
        let slots = table.len() + 1;
        let harmonic = (1..=slots).map(|r| 1.0 / r as f64).sum();
        Self { table, harmonic }
    }

    fn unknown_rank(&self) -> u32 {
        self.table.len() as u32 + 1
    }

    fn log_probability(&self, word: &str) -> f64 {
        let rank = self.table.rank(word).unwrap_or_else(|| self.unknown_rank());
        -((rank as f64) * self.harmonic).ln()
    }
}

impl PerplexityScorer for ZipfLanguageModel {
    fn perplexity(&self, text: &str) -> CollaboratorResult<f64> {
        let words: Vec<String> = tokenize(text)
            .into_iter()
            .filter(|t| t.is_alpha)
            .map(|t| t.text)
            .collect();
        if words.is_empty() {
            return Err(CollaboratorError::invalid("no words to score"));
        }

        let mean_log_prob =
            words.iter().map(|w| self.log_probability(w)).sum::<f64>() / words.len() as f64;
        Ok((-mean_log_prob).exp())
    }
}
