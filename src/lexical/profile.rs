//! Vocabulary profile assembly.

use super::cefr::cefr_level;
use super::complexity::{word_complexity, word_features};
use super::context::context_appropriateness_with;
use super::{LexicalResources, LookupFailures};
use crate::config::LexicalConfig;
use crate::core::{
    empty_cefr_counts, CefrLevel, ComplexWord, ModuleOutcome, VocabularyProfile,
};
use crate::lexicon::content_words;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info_span, warn};

#[derive(Debug, Clone, Copy)]
struct ScoredWord {
    complexity: f64,
    level: CefrLevel,
}

/// Compute the full lexical profile of `text`.
///
/// Scored tokens are the lowercased alphabetic non-stop-words. Lookup
/// failures skip the affected word and are reported as degradations; missing
/// dictionary entries are silently skipped.
pub fn compute_vocabulary_profile(
    text: &str,
    resources: &LexicalResources<'_>,
    config: &LexicalConfig,
) -> ModuleOutcome<VocabularyProfile> {
    let _span = info_span!("lexical_metrics", text_len = text.len()).entered();

    let words = content_words(text);
    if words.is_empty() {
        debug!("No scorable words, returning empty profile");
        return ModuleOutcome::clean(VocabularyProfile::empty());
    }

    let unique_words: BTreeSet<String> = words.iter().cloned().collect();
    let lexical_diversity = unique_words.len() as f64 / words.len() as f64;

    let mut failures = LookupFailures::default();
    let mut cache: HashMap<&str, Option<ScoredWord>> = HashMap::new();
    let mut complexities = Vec::with_capacity(words.len());
    let mut cefr_levels = empty_cefr_counts();

    for word in &words {
        let scored = *cache.entry(word.as_str()).or_insert_with(|| {
            match word_features(word, resources) {
                Ok(features) => Some(ScoredWord {
                    complexity: word_complexity(&features, &config.normalizers),
                    level: cefr_level(features.frequency_rank, &config.cefr),
                }),
                Err((collaborator, err)) => {
                    failures.record(collaborator, err);
                    None
                }
            }
        });

        if let Some(scored) = scored {
            complexities.push(scored.complexity);
            *cefr_levels.entry(scored.level).or_insert(0) += 1;
        }
    }

    let sophistication = if complexities.is_empty() {
        0.0
    } else {
        complexities.iter().sum::<f64>() / complexities.len() as f64
    };

    let complex_words = rank_complex_words(&cache, config);

    let context_appropriateness =
        context_appropriateness_with(text, resources.embeddings, &mut failures);

    let degradations = failures.into_degradations();
    for degradation in &degradations {
        warn!(
            collaborator = %degradation.collaborator,
            reason = %degradation.reason,
            "Lexical lookup failed, affected words skipped"
        );
    }

    let profile = VocabularyProfile {
        lexical_diversity,
        sophistication,
        context_appropriateness,
        unique_words,
        total_words: words.len(),
        cefr_levels,
        complex_words,
    };

    debug!(
        total_words = profile.total_words,
        unique = profile.unique_words.len(),
        sophistication = profile.sophistication,
        "Vocabulary profile computed"
    );

    ModuleOutcome::with_degradations(profile, degradations)
}

/// Unique words above the threshold, most complex first, ties by word.
fn rank_complex_words(
    scored: &HashMap<&str, Option<ScoredWord>>,
    config: &LexicalConfig,
) -> Vec<ComplexWord> {
    let mut complex: Vec<ComplexWord> = scored
        .iter()
        .filter_map(|(word, scored)| scored.map(|s| (*word, s)))
        .filter(|(_, s)| s.complexity > config.complex_word_threshold)
        .map(|(word, s)| ComplexWord {
            word: word.to_string(),
            complexity: s.complexity,
            cefr_level: s.level,
        })
        .collect();

    complex.sort_by(|a, b| {
        b.complexity
            .partial_cmp(&a.complexity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.word.cmp(&b.word))
    });
    complex.truncate(config.max_complex_words);
    complex
}
