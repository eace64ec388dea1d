//! Deterministic collaborator doubles.
//!
//! [`MockCollaborators`] builds a [`Collaborators`] bundle whose every
//! answer is fixed up front, so scores can be asserted exactly. Each
//! collaborator can also be switched to fail, for exercising fallbacks.
//!
//! # Example
//!
//! ```rust,ignore
//! use commscore::testkit::MockCollaborators;
//!
//! let aggregator = MockCollaborators::new()
//!     .with_issue_count(3)
//!     .with_failing_contextual_embedder()
//!     .aggregator();
//! let result = aggregator.analyze("Some text to score.");
//! ```

use crate::core::CollaboratorError;
use crate::io::{
    CollaboratorResult, FrequencyRanker, GrammarChecker, GrammarFinding, PerplexityScorer,
    ReadabilityScorer, SenseInventory, SentenceEmbedder, SuggestionGenerator, SyllableCounter,
    TextCorrector, Transcriber, WordEmbedder,
};
use crate::lexicon::heuristic_syllables;
use crate::pipeline::{Aggregator, Collaborators};
use std::collections::HashMap;
use std::sync::Arc;

fn offline(what: &str) -> CollaboratorError {
    CollaboratorError::unavailable(format!("mock {what} configured to fail"))
}

/// How the mock sentence embedders place consecutive sentences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SentenceLayout {
    /// Every sentence gets the same vector: similarity 1.0
    Identical,
    /// Consecutive sentences are orthogonal: similarity 0.0
    Orthogonal,
    /// Consecutive sentences are `angle` radians apart
    Rotating(f32),
    /// The embedder fails
    Failing,
}

/// How the mock corrector rewrites text.
#[derive(Debug, Clone, PartialEq)]
pub enum Correction {
    /// Returns the input unchanged
    Echo,
    /// Returns this text regardless of input
    Fixed(String),
    /// The corrector fails
    Failing,
}

/// Fluent builder for deterministic collaborators.
#[derive(Debug, Clone)]
pub struct MockCollaborators {
    issue_count: Option<usize>,
    correction: Correction,
    primary_layout: SentenceLayout,
    contextual_layout: SentenceLayout,
    word_vectors_fail: bool,
    ranks: HashMap<String, u32>,
    default_rank: u32,
    senses: u32,
    lexicon_fails: bool,
    perplexity: Option<f64>,
    reading_ease: Option<f64>,
    suggestion: Option<Option<String>>,
    transcript: Option<Option<String>>,
}

impl Default for MockCollaborators {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCollaborators {
    /// Clean text, identical sentences, common words, perplexity 50, ease 60.
    pub fn new() -> Self {
        Self {
            issue_count: Some(0),
            correction: Correction::Echo,
            primary_layout: SentenceLayout::Identical,
            contextual_layout: SentenceLayout::Identical,
            word_vectors_fail: false,
            ranks: HashMap::new(),
            default_rank: 500,
            senses: 1,
            lexicon_fails: false,
            perplexity: Some(50.0),
            reading_ease: Some(60.0),
            suggestion: None,
            transcript: None,
        }
    }

    pub fn with_issue_count(mut self, count: usize) -> Self {
        self.issue_count = Some(count);
        self
    }

    pub fn with_failing_checker(mut self) -> Self {
        self.issue_count = None;
        self
    }

    pub fn with_correction(mut self, corrected: impl Into<String>) -> Self {
        self.correction = Correction::Fixed(corrected.into());
        self
    }

    pub fn with_failing_corrector(mut self) -> Self {
        self.correction = Correction::Failing;
        self
    }

    pub fn with_sentence_layout(mut self, layout: SentenceLayout) -> Self {
        self.primary_layout = layout;
        self.contextual_layout = layout;
        self
    }

    pub fn with_failing_sentence_embedder(mut self) -> Self {
        self.primary_layout = SentenceLayout::Failing;
        self
    }

    pub fn with_failing_contextual_embedder(mut self) -> Self {
        self.contextual_layout = SentenceLayout::Failing;
        self
    }

    pub fn with_failing_word_embedder(mut self) -> Self {
        self.word_vectors_fail = true;
        self
    }

    pub fn with_word_rank(mut self, word: impl Into<String>, rank: u32) -> Self {
        self.ranks.insert(word.into(), rank);
        self
    }

    pub fn with_default_rank(mut self, rank: u32) -> Self {
        self.default_rank = rank;
        self
    }

    pub fn with_sense_count(mut self, senses: u32) -> Self {
        self.senses = senses;
        self
    }

    /// Frequency, syllable and sense lookups all fail.
    pub fn with_failing_lexicon(mut self) -> Self {
        self.lexicon_fails = true;
        self
    }

    pub fn with_perplexity(mut self, perplexity: f64) -> Self {
        self.perplexity = Some(perplexity);
        self
    }

    pub fn with_failing_perplexity(mut self) -> Self {
        self.perplexity = None;
        self
    }

    pub fn with_reading_ease(mut self, ease: f64) -> Self {
        self.reading_ease = Some(ease);
        self
    }

    pub fn with_failing_readability(mut self) -> Self {
        self.reading_ease = None;
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(Some(suggestion.into()));
        self
    }

    pub fn with_failing_suggestion(mut self) -> Self {
        self.suggestion = Some(None);
        self
    }

    pub fn with_transcript(mut self, transcript: impl Into<String>) -> Self {
        self.transcript = Some(Some(transcript.into()));
        self
    }

    pub fn with_failing_transcriber(mut self) -> Self {
        self.transcript = Some(None);
        self
    }

    pub fn build(self) -> Collaborators {
        let lexicon = Arc::new(MockLexicon {
            ranks: self.ranks,
            default_rank: self.default_rank,
            senses: self.senses,
            fails: self.lexicon_fails,
        });

        let mut collaborators = Collaborators {
            grammar_checker: Arc::new(MockChecker(self.issue_count)),
            corrector: Arc::new(MockCorrector(self.correction)),
            sentence_embedder: Arc::new(MockSentenceEmbedder(self.primary_layout)),
            contextual_embedder: Arc::new(MockSentenceEmbedder(self.contextual_layout)),
            word_embedder: Arc::new(MockWordEmbedder(self.word_vectors_fail)),
            frequency: lexicon.clone(),
            syllables: lexicon.clone(),
            senses: lexicon,
            perplexity: Arc::new(MockScalar(self.perplexity)),
            readability: Arc::new(MockScalar(self.reading_ease)),
            suggestion: None,
            transcriber: None,
        };

        if let Some(suggestion) = self.suggestion {
            collaborators = collaborators.with_suggestion(Arc::new(MockText(suggestion)));
        }
        if let Some(transcript) = self.transcript {
            collaborators = collaborators.with_transcriber(Arc::new(MockText(transcript)));
        }

        collaborators
    }

    /// Aggregator with default configuration over these mocks.
    pub fn aggregator(self) -> Aggregator {
        Aggregator::with_defaults(self.build())
    }
}

struct MockChecker(Option<usize>);

impl GrammarChecker for MockChecker {
    fn check(&self, _text: &str) -> CollaboratorResult<Vec<GrammarFinding>> {
        let count = self.0.ok_or_else(|| offline("grammar checker"))?;
        Ok((1..=count)
            .map(|i| GrammarFinding::new(format!("mock issue {i}"), None))
            .collect())
    }
}

struct MockCorrector(Correction);

impl TextCorrector for MockCorrector {
    fn correct(&self, text: &str) -> CollaboratorResult<String> {
        match &self.0 {
            Correction::Echo => Ok(text.to_string()),
            Correction::Fixed(corrected) => Ok(corrected.clone()),
            Correction::Failing => Err(offline("corrector")),
        }
    }
}

struct MockSentenceEmbedder(SentenceLayout);

impl SentenceEmbedder for MockSentenceEmbedder {
    fn embed(&self, sentences: &[String]) -> CollaboratorResult<Vec<Vec<f32>>> {
        let step = match self.0 {
            SentenceLayout::Identical => 0.0,
            SentenceLayout::Orthogonal => std::f32::consts::FRAC_PI_2,
            SentenceLayout::Rotating(angle) => angle,
            SentenceLayout::Failing => return Err(offline("sentence embedder")),
        };
        Ok((0..sentences.len())
            .map(|i| {
                let angle = step * i as f32;
                vec![angle.cos(), angle.sin()]
            })
            .collect())
    }
}

struct MockWordEmbedder(bool);

impl WordEmbedder for MockWordEmbedder {
    fn word_vector(&self, _word: &str) -> CollaboratorResult<Vec<f32>> {
        if self.0 {
            Err(offline("word embedder"))
        } else {
            Ok(vec![1.0, 1.0, 1.0])
        }
    }
}

struct MockLexicon {
    ranks: HashMap<String, u32>,
    default_rank: u32,
    senses: u32,
    fails: bool,
}

impl MockLexicon {
    fn check(&self, what: &str) -> CollaboratorResult<()> {
        if self.fails {
            Err(offline(what))
        } else {
            Ok(())
        }
    }
}

impl FrequencyRanker for MockLexicon {
    fn frequency_rank(&self, word: &str) -> CollaboratorResult<u32> {
        self.check("frequency ranker")?;
        Ok(self.ranks.get(word).copied().unwrap_or(self.default_rank))
    }
}

impl SyllableCounter for MockLexicon {
    fn syllable_count(&self, word: &str) -> CollaboratorResult<u32> {
        self.check("syllable counter")?;
        Ok(heuristic_syllables(word))
    }
}

impl SenseInventory for MockLexicon {
    fn sense_count(&self, _word: &str) -> CollaboratorResult<u32> {
        self.check("sense inventory")?;
        Ok(self.senses)
    }
}

struct MockScalar(Option<f64>);

impl PerplexityScorer for MockScalar {
    fn perplexity(&self, _text: &str) -> CollaboratorResult<f64> {
        self.0.ok_or_else(|| offline("perplexity scorer"))
    }
}

impl ReadabilityScorer for MockScalar {
    fn reading_ease(&self, _text: &str) -> CollaboratorResult<f64> {
        self.0.ok_or_else(|| offline("readability scorer"))
    }
}

struct MockText(Option<String>);

impl SuggestionGenerator for MockText {
    fn suggest(&self, _text: &str) -> CollaboratorResult<String> {
        self.0.clone().ok_or_else(|| offline("suggestion generator"))
    }
}

impl Transcriber for MockText {
    fn transcribe(&self, _audio: &[u8]) -> CollaboratorResult<String> {
        self.0.clone().ok_or_else(|| offline("transcriber"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_clean() {
        let collaborators = MockCollaborators::new().build();
        assert!(collaborators.grammar_checker.check("x").unwrap().is_empty());
        assert_eq!(collaborators.corrector.correct("same").unwrap(), "same");
        assert!(collaborators.suggestion.is_none());
        assert!(collaborators.transcriber.is_none());
    }

    #[test]
    fn test_rank_overrides() {
        let collaborators = MockCollaborators::new()
            .with_word_rank("ubiquitous", 9000)
            .build();
        assert_eq!(collaborators.frequency.frequency_rank("ubiquitous").unwrap(), 9000);
        assert_eq!(collaborators.frequency.frequency_rank("cat").unwrap(), 500);
    }

    #[test]
    fn test_failing_switches() {
        let collaborators = MockCollaborators::new()
            .with_failing_checker()
            .with_failing_perplexity()
            .with_failing_transcriber()
            .build();
        assert!(collaborators.grammar_checker.check("x").is_err());
        assert!(collaborators.perplexity.perplexity("x").is_err());
        assert!(collaborators
            .transcriber
            .as_ref()
            .unwrap()
            .transcribe(b"abc")
            .is_err());
    }
}
