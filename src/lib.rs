// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod io;
pub mod lexical;
pub mod lexicon;
pub mod observability;
pub mod pipeline;
pub mod scoring;
pub mod testkit;

// Re-export commonly used types
pub use crate::core::{
    AnalysisResult, CefrLevel, CollaboratorError, ComplexWord, Degradation, Error,
    FeedbackBundle, GrammarIssues, ModuleOutcome, Result, ScoreBundle, ScoringModule,
    VocabularyProfile,
};

pub use crate::config::{load_config, CommscoreConfig};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::lexical::{compute_vocabulary_profile, LexicalResources};

pub use crate::pipeline::{Aggregator, Collaborators};

pub use crate::scoring::{
    compute_coherence_score, compute_fluency_score, compute_grammar_score,
    extract_grammar_issues, QualityLabel,
};
