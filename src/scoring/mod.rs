//! Sub-score modules: grammar, fluency and coherence, plus the shared
//! normalization helpers and qualitative labels.
//!
//! Each module returns a [`ModuleOutcome`](crate::core::ModuleOutcome) so
//! collaborator fallbacks stay visible to the caller.

pub mod coherence;
pub mod fluency;
pub mod grammar;
pub mod labels;
pub mod normalize;

pub use coherence::compute_coherence_score;
pub use fluency::compute_fluency_score;
pub use grammar::{compute_grammar_score, diff_grammar_issues, extract_grammar_issues};
pub use labels::QualityLabel;
pub use normalize::{clamp_score, mean, round3};
