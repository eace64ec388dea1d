//! Test fixtures: sample texts and a fluent config builder.

use crate::config::{CommscoreConfig, GrammarStrategy, ScoringWeights};

/// Six words, no grammar issues, three unique content words.
pub const SIMPLE_SENTENCE: &str = "The cat sat on the mat.";

/// Exactly ten whitespace-separated words.
pub const TEN_WORD_TEXT: &str = "Yesterday we walk to the store and buyed some apple.";

/// Several related sentences.
pub const SHORT_SPEECH: &str = "I enjoy working with people from different backgrounds. \
    Collaboration helps our team solve difficult problems. \
    We regularly share ideas and learn from each other.";

/// Build test configurations fluently.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: CommscoreConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sequential(mut self) -> Self {
        self.config.pipeline.parallel = false;
        self
    }

    pub fn grammar_strategy(mut self, strategy: GrammarStrategy) -> Self {
        self.config.grammar.strategy = strategy;
        self
    }

    pub fn weights(mut self, grammar: f64, vocabulary: f64, fluency: f64, coherence: f64) -> Self {
        self.config.scoring.weights = ScoringWeights {
            grammar,
            vocabulary,
            fluency,
            coherence,
        };
        self
    }

    pub fn floor(mut self, floor: f64) -> Self {
        self.config.scoring.floor = floor;
        self
    }

    pub fn max_feedback_items(mut self, max_items: usize) -> Self {
        self.config.feedback.max_items = max_items;
        self
    }

    pub fn build(self) -> CommscoreConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::word_count;

    #[test]
    fn test_fixture_word_counts() {
        assert_eq!(word_count(SIMPLE_SENTENCE), 6);
        assert_eq!(word_count(TEN_WORD_TEXT), 10);
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = ConfigBuilder::new()
            .sequential()
            .grammar_strategy(GrammarStrategy::Blended)
            .weights(0.4, 0.2, 0.2, 0.2)
            .build();
        assert!(!config.pipeline.parallel);
        assert_eq!(config.grammar.strategy, GrammarStrategy::Blended);
        assert_eq!(config.scoring.weights.grammar, 0.4);
    }
}
