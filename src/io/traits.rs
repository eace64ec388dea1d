//! Collaborator capability traits for the scoring pipeline.
//!
//! The scoring core never talks to a model, service or file directly. Every
//! external capability it needs is expressed as one of these traits and
//! injected through [`crate::pipeline::Collaborators`], so that:
//! - production adapters (HTTP services, local models) can be swapped in
//! - tests run against deterministic doubles from [`crate::testkit`]
//! - each failure surfaces as a [`CollaboratorError`] the caller matches on
//!
//! # Thread Safety
//!
//! Every trait requires `Send + Sync` so that the four scoring modules can be
//! evaluated concurrently against shared collaborators.

use crate::core::CollaboratorError;

/// Result type returned by every collaborator call.
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;

/// One issue reported by a grammar checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarFinding {
    pub message: String,
    pub suggested_replacement: Option<String>,
}

impl GrammarFinding {
    pub fn new(message: impl Into<String>, suggested_replacement: Option<String>) -> Self {
        Self {
            message: message.into(),
            suggested_replacement,
        }
    }
}

/// Flags grammar issues in a text.
pub trait GrammarChecker: Send + Sync {
    fn check(&self, text: &str) -> CollaboratorResult<Vec<GrammarFinding>>;
}

/// Produces a corrected rewrite of a text.
pub trait TextCorrector: Send + Sync {
    fn correct(&self, text: &str) -> CollaboratorResult<String>;
}

/// Embeds whole sentences. Must return exactly one vector per input sentence.
pub trait SentenceEmbedder: Send + Sync {
    fn embed(&self, sentences: &[String]) -> CollaboratorResult<Vec<Vec<f32>>>;
}

/// Looks up the vector for a single word.
///
/// Returns [`CollaboratorError::MissingEntry`] when the word has no embedding.
pub trait WordEmbedder: Send + Sync {
    fn word_vector(&self, word: &str) -> CollaboratorResult<Vec<f32>>;
}

/// Position of a word in a reference frequency ranking (1 = most frequent).
pub trait FrequencyRanker: Send + Sync {
    fn frequency_rank(&self, word: &str) -> CollaboratorResult<u32>;
}

/// Syllable count estimate for a word.
pub trait SyllableCounter: Send + Sync {
    fn syllable_count(&self, word: &str) -> CollaboratorResult<u32>;
}

/// Number of distinct dictionary senses of a word.
pub trait SenseInventory: Send + Sync {
    fn sense_count(&self, word: &str) -> CollaboratorResult<u32>;
}

/// Language-model perplexity of a text; lower means more natural.
pub trait PerplexityScorer: Send + Sync {
    fn perplexity(&self, text: &str) -> CollaboratorResult<f64>;
}

/// Readability-ease metric of a text (Flesch scale, higher = easier).
pub trait ReadabilityScorer: Send + Sync {
    fn reading_ease(&self, text: &str) -> CollaboratorResult<f64>;
}

/// Free-form phrasing advice, typically LLM backed.
pub trait SuggestionGenerator: Send + Sync {
    fn suggest(&self, text: &str) -> CollaboratorResult<String>;
}

/// Speech-to-text.
pub trait Transcriber: Send + Sync {
    fn transcribe(&self, audio: &[u8]) -> CollaboratorResult<String>;
}
