//! Lexical metrics engine.
//!
//! Turns raw text into a [`VocabularyProfile`](crate::core::VocabularyProfile):
//! diversity, sophistication, CEFR distribution, the most complex words and
//! how well each word fits its sentence.

pub mod cefr;
pub mod complexity;
pub mod context;
pub mod profile;

pub use cefr::cefr_level;
pub use complexity::{word_complexity, word_features, WordFeatures};
pub use context::context_appropriateness;
pub use profile::compute_vocabulary_profile;

use crate::core::{CollaboratorError, Degradation, ScoringModule};
use crate::io::{FrequencyRanker, SenseInventory, SyllableCounter, WordEmbedder};
use std::collections::BTreeMap;

/// Lexical resources consulted per word.
#[derive(Clone, Copy)]
pub struct LexicalResources<'a> {
    pub frequency: &'a dyn FrequencyRanker,
    pub syllables: &'a dyn SyllableCounter,
    pub senses: &'a dyn SenseInventory,
    pub embeddings: &'a dyn WordEmbedder,
}

/// Lookup failures grouped by collaborator.
///
/// Missing entries are expected for rare words and are not recorded.
#[derive(Debug, Default)]
pub(crate) struct LookupFailures {
    by_collaborator: BTreeMap<&'static str, (usize, CollaboratorError)>,
}

impl LookupFailures {
    pub(crate) fn record(&mut self, collaborator: &'static str, error: CollaboratorError) {
        if matches!(error, CollaboratorError::MissingEntry(_)) {
            return;
        }
        self.by_collaborator
            .entry(collaborator)
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, error));
    }

    pub(crate) fn into_degradations(self) -> Vec<Degradation> {
        self.by_collaborator
            .into_iter()
            .map(|(collaborator, (count, first))| {
                let reason = if count == 1 {
                    first.to_string()
                } else {
                    format!("{first} ({count} lookups failed)")
                };
                Degradation::new(ScoringModule::Lexical, collaborator, reason)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entries_are_not_failures() {
        let mut failures = LookupFailures::default();
        failures.record("word embedder", CollaboratorError::MissingEntry("zzz".into()));
        assert!(failures.into_degradations().is_empty());
    }

    #[test]
    fn test_failures_collapse_per_collaborator() {
        let mut failures = LookupFailures::default();
        failures.record("sense inventory", CollaboratorError::unavailable("down"));
        failures.record("sense inventory", CollaboratorError::unavailable("down"));
        let degradations = failures.into_degradations();
        assert_eq!(degradations.len(), 1);
        assert_eq!(degradations[0].module, ScoringModule::Lexical);
        assert!(degradations[0].reason.contains("2 lookups failed"));
    }
}
