//! Injected collaborator capabilities.
//!
//! Every external service the pipeline depends on is held as a shared trait
//! object so tests can swap in deterministic doubles and the CLI can run on
//! the built-in offline adapters.

use crate::io::{
    FrequencyRanker, GrammarChecker, PerplexityScorer, ReadabilityScorer, SenseInventory,
    SentenceEmbedder, SuggestionGenerator, SyllableCounter, TextCorrector, Transcriber,
    WordEmbedder,
};
use crate::lexicon::{
    ContextualHashingEmbedder, FleschReadability, FrequencyTable, HashingEmbedder,
    RuleBasedGrammar, SenseTable, SyllableDictionary, ZipfLanguageModel,
};
use std::sync::Arc;

/// The full set of collaborators used by one [`Aggregator`](super::Aggregator).
#[derive(Clone)]
pub struct Collaborators {
    pub grammar_checker: Arc<dyn GrammarChecker>,
    pub corrector: Arc<dyn TextCorrector>,
    /// Primary coherence signal
    pub sentence_embedder: Arc<dyn SentenceEmbedder>,
    /// Secondary coherence signal
    pub contextual_embedder: Arc<dyn SentenceEmbedder>,
    pub word_embedder: Arc<dyn WordEmbedder>,
    pub frequency: Arc<dyn FrequencyRanker>,
    pub syllables: Arc<dyn SyllableCounter>,
    pub senses: Arc<dyn SenseInventory>,
    pub perplexity: Arc<dyn PerplexityScorer>,
    pub readability: Arc<dyn ReadabilityScorer>,
    pub suggestion: Option<Arc<dyn SuggestionGenerator>>,
    pub transcriber: Option<Arc<dyn Transcriber>>,
}

impl Collaborators {
    /// Offline adapters over the built-in word list.
    pub fn offline(out_of_vocabulary_rank: u32) -> Self {
        Self::from_lexicon(
            FrequencyTable::builtin(out_of_vocabulary_rank),
            SyllableDictionary::new(),
            SenseTable::new(),
        )
    }

    /// Offline adapters over caller-supplied lexical tables.
    pub fn from_lexicon(
        frequency: FrequencyTable,
        syllables: SyllableDictionary,
        senses: SenseTable,
    ) -> Self {
        let frequency = Arc::new(frequency);
        let grammar = Arc::new(RuleBasedGrammar::new());

        Self {
            grammar_checker: grammar.clone(),
            corrector: grammar,
            sentence_embedder: Arc::new(HashingEmbedder::default()),
            contextual_embedder: Arc::new(ContextualHashingEmbedder::default()),
            word_embedder: Arc::new(HashingEmbedder::default()),
            perplexity: Arc::new(ZipfLanguageModel::new(frequency.clone())),
            readability: Arc::new(FleschReadability::new(syllables.clone())),
            frequency,
            syllables: Arc::new(syllables),
            senses: Arc::new(senses),
            suggestion: None,
            transcriber: None,
        }
    }

    pub fn with_grammar_checker(mut self, checker: Arc<dyn GrammarChecker>) -> Self {
        self.grammar_checker = checker;
        self
    }

    pub fn with_corrector(mut self, corrector: Arc<dyn TextCorrector>) -> Self {
        self.corrector = corrector;
        self
    }

    pub fn with_sentence_embedder(mut self, embedder: Arc<dyn SentenceEmbedder>) -> Self {
        self.sentence_embedder = embedder;
        self
    }

    pub fn with_contextual_embedder(mut self, embedder: Arc<dyn SentenceEmbedder>) -> Self {
        self.contextual_embedder = embedder;
        self
    }

    pub fn with_word_embedder(mut self, embedder: Arc<dyn WordEmbedder>) -> Self {
        self.word_embedder = embedder;
        self
    }

    pub fn with_frequency(mut self, frequency: Arc<dyn FrequencyRanker>) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_syllables(mut self, syllables: Arc<dyn SyllableCounter>) -> Self {
        self.syllables = syllables;
        self
    }

    pub fn with_senses(mut self, senses: Arc<dyn SenseInventory>) -> Self {
        self.senses = senses;
        self
    }

    pub fn with_perplexity(mut self, perplexity: Arc<dyn PerplexityScorer>) -> Self {
        self.perplexity = perplexity;
        self
    }

    pub fn with_readability(mut self, readability: Arc<dyn ReadabilityScorer>) -> Self {
        self.readability = readability;
        self
    }

    pub fn with_suggestion(mut self, generator: Arc<dyn SuggestionGenerator>) -> Self {
        self.suggestion = Some(generator);
        self
    }

    pub fn with_transcriber(mut self, transcriber: Arc<dyn Transcriber>) -> Self {
        self.transcriber = Some(transcriber);
        self
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators")
            .field("suggestion", &self.suggestion.is_some())
            .field("transcriber", &self.transcriber.is_some())
            .finish_non_exhaustive()
    }
}
