//! Word frequency rank tables.

use super::common_words::COMMON_WORDS;
use super::tokenize::tokenize;
use crate::core::{CollaboratorError, Error, Result};
use crate::io::traits::{CollaboratorResult, FrequencyRanker};
use std::collections::HashMap;
use std::path::Path;

/// Immutable word -> rank table (1 = most frequent).
///
/// Built once at startup and shared read-only across calls.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    ranks: HashMap<String, u32>,
    out_of_vocabulary_rank: u32,
}

impl FrequencyTable {
    /// Build from words listed most-frequent first. Later duplicates are ignored.
    pub fn from_ranked_words<I, S>(words: I, out_of_vocabulary_rank: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ranks = HashMap::new();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() || ranks.contains_key(&word) {
                continue;
            }
            let rank = ranks.len() as u32 + 1;
            ranks.insert(word, rank);
        }
        Self {
            ranks,
            out_of_vocabulary_rank,
        }
    }

    /// Rank words of a reference corpus by occurrence count.
    ///
    /// Ties are broken alphabetically so the table is deterministic.
    pub fn from_corpus(corpus: &str, out_of_vocabulary_rank: u32) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in tokenize(corpus).into_iter().filter(|t| t.is_alpha) {
            *counts.entry(token.text).or_insert(0) += 1;
        }

        let mut ordered: Vec<(String, usize)> = counts.into_iter().collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self::from_ranked_words(ordered.into_iter().map(|(word, _)| word), out_of_vocabulary_rank)
    }

    /// Table over the built-in common English word list.
    pub fn builtin(out_of_vocabulary_rank: u32) -> Self {
        Self::from_ranked_words(COMMON_WORDS.iter().copied(), out_of_vocabulary_rank)
    }

    /// Load a ranked word list: one entry per line, first field is the word.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_ranked_list_file(path: &Path, out_of_vocabulary_rank: u32) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::file_system("Failed to read frequency list", path, e))?;
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_whitespace().next());
        Ok(Self::from_ranked_words(words, out_of_vocabulary_rank))
    }

    pub fn rank(&self, word: &str) -> Option<u32> {
        self.ranks.get(word).copied()
    }

    pub fn out_of_vocabulary_rank(&self) -> u32 {
        self.out_of_vocabulary_rank
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl FrequencyRanker for FrequencyTable {
    fn frequency_rank(&self, word: &str) -> CollaboratorResult<u32> {
        if word.is_empty() {
            return Err(CollaboratorError::MissingEntry(word.to_string()));
        }
        let word = word.to_lowercase();
        Ok(self.rank(&word).unwrap_or(self.out_of_vocabulary_rank))
    }
}
