//! Coherence scoring from adjacent-sentence similarity.
//!
//! Two independent sentence embedders are consulted; their mean adjacent
//! similarities are averaged. Either source alone is enough.

use super::normalize::{clamp_score, mean, round3};
use crate::common::cosine_similarity;
use crate::config::CoherenceConfig;
use crate::core::{CollaboratorError, Degradation, ModuleOutcome, ScoringModule};
use crate::io::SentenceEmbedder;
use crate::lexicon::split_sentences;
use tracing::{debug, info_span, warn};

/// Sentences that count for coherence: longer than one character once trimmed.
pub fn coherence_sentences(text: &str) -> Vec<String> {
    split_sentences(text)
        .into_iter()
        .filter(|sentence| sentence.trim().chars().count() > 1)
        .collect()
}

/// Mean cosine similarity of each adjacent sentence pair under `embedder`.
///
/// Zero vectors (sentences with nothing to embed, such as "42!") are
/// skipped and their neighbours compared directly. `Ok(None)` means fewer
/// than two sentences carried content. Missing, non-finite or differently
/// sized vectors are a collaborator failure.
pub fn adjacent_similarity(
    sentences: &[String],
    embedder: &dyn SentenceEmbedder,
) -> Result<Option<f64>, CollaboratorError> {
    let vectors = embedder.embed(sentences)?;
    if vectors.len() != sentences.len() {
        return Err(CollaboratorError::DimensionMismatch {
            expected: sentences.len(),
            actual: vectors.len(),
        });
    }

    let dimensions = vectors.first().map_or(0, Vec::len);
    if let Some(bad) = vectors.iter().find(|v| v.len() != dimensions) {
        return Err(CollaboratorError::DimensionMismatch {
            expected: dimensions,
            actual: bad.len(),
        });
    }
    if vectors.iter().flatten().any(|value| !value.is_finite()) {
        return Err(CollaboratorError::invalid("sentence vector has non-finite components"));
    }

    let with_content: Vec<&Vec<f32>> = vectors
        .iter()
        .filter(|v| v.iter().any(|value| *value != 0.0))
        .collect();
    let similarities: Vec<f64> = with_content
        .windows(2)
        .filter_map(|pair| cosine_similarity(pair[0], pair[1]))
        .collect();

    Ok(mean(&similarities))
}

/// Coherence sub-score.
///
/// Fewer than two sentences with content score `single_sentence_score`;
/// every source failing scores `fallback_score`. The result is kept within
/// `[floor, 1]` and rounded to three decimals.
pub fn compute_coherence_score(
    text: &str,
    sources: &[(&'static str, &dyn SentenceEmbedder)],
    config: &CoherenceConfig,
    floor: f64,
) -> ModuleOutcome<f64> {
    let _span = info_span!("coherence_score").entered();

    let single_sentence = round3(clamp_score(config.single_sentence_score, floor));
    let sentences = coherence_sentences(text);
    if sentences.len() < 2 {
        debug!(sentences = sentences.len(), "Too few sentences for coherence");
        return ModuleOutcome::clean(single_sentence);
    }

    let mut degradations = Vec::new();
    let mut per_source = Vec::with_capacity(sources.len());
    let mut answered = false;

    for (name, embedder) in sources {
        match adjacent_similarity(&sentences, *embedder) {
            Ok(similarity) => {
                answered = true;
                per_source.extend(similarity);
            }
            Err(err) => {
                warn!(collaborator = *name, error = %err, "Sentence embedding failed");
                degradations.push(Degradation::new(ScoringModule::Coherence, *name, err));
            }
        }
    }

    let score = match mean(&per_source) {
        Some(similarity) => round3(clamp_score(similarity, floor)),
        None if answered => {
            debug!("Fewer than two sentences carried content");
            single_sentence
        }
        None => {
            warn!(fallback = config.fallback_score, "No embedding source answered");
            round3(clamp_score(config.fallback_score, floor))
        }
    };

    debug!(sentences = sentences.len(), score, "Coherence score computed");
    ModuleOutcome::with_degradations(score, degradations)
}
