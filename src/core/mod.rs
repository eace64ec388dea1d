//! Core value types and errors shared by every pipeline stage.

pub mod errors;
pub mod types;

pub use errors::{CollaboratorError, Error, Result};
pub use types::{
    empty_cefr_counts, AnalysisResult, CefrLevel, ComplexWord, Degradation, FeedbackBundle,
    GrammarIssues, ModuleOutcome, ScoreBundle, ScoringModule, VocabularyProfile,
};
