//! Human-readable feedback lines.

use crate::common::join_first;
use crate::config::FeedbackConfig;
use crate::core::{Degradation, FeedbackBundle, GrammarIssues, ScoringModule, VocabularyProfile};
use std::collections::BTreeSet;

/// Assemble the feedback lines for one analysis.
///
/// Lines appear only when there is something to say: grammar issues,
/// advanced vocabulary, and which modules fell back to defaults.
pub fn build_feedback(
    grammar: &GrammarIssues,
    vocabulary: &VocabularyProfile,
    degradations: &[Degradation],
    config: &FeedbackConfig,
) -> FeedbackBundle {
    let mut feedback = FeedbackBundle::new();

    if !grammar.issues.is_empty() {
        feedback.push(format!(
            "Grammar issues found: {}",
            join_first(&grammar.issues, config.max_items)
        ));
    }

    if !vocabulary.complex_words.is_empty() {
        let words: Vec<&str> = vocabulary
            .complex_words
            .iter()
            .map(|w| w.word.as_str())
            .collect();
        feedback.push(format!(
            "Good use of sophisticated words: {}",
            join_first(&words, config.max_items)
        ));
    }

    if !degradations.is_empty() {
        let modules: BTreeSet<ScoringModule> = degradations.iter().map(|d| d.module).collect();
        let names: Vec<&str> = modules.iter().map(ScoringModule::name).collect();
        feedback.push(format!("Analysis degraded: {}", names.join(", ")));
    }

    feedback
}
