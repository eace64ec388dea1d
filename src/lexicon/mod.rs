//! Built-in lexical resources and offline collaborator adapters.
//!
//! These let the pipeline run without any external service: a frequency
//! ranking, syllable and sense lookups, hashing embedders, a unigram
//! language model, Flesch readability and a rule-based grammar checker.
//! Production deployments may replace any of them with model-backed
//! adapters implementing the same [`crate::io::traits`].

pub mod common_words;
pub mod embedding;
pub mod frequency;
pub mod grammar_rules;
pub mod language_model;
pub mod readability;
pub mod senses;
pub mod syllables;
pub mod tokenize;

pub use embedding::{ContextualHashingEmbedder, HashingEmbedder};
pub use frequency::FrequencyTable;
pub use grammar_rules::RuleBasedGrammar;
pub use language_model::ZipfLanguageModel;
pub use readability::FleschReadability;
pub use senses::SenseTable;
pub use syllables::{heuristic_syllables, SyllableDictionary};
pub use tokenize::{content_words, is_stop_word, split_sentences, tokenize, word_count, Token};
