//! Testing infrastructure: deterministic collaborators, fixtures and
//! assertion macros.
//!
//! Real collaborators are slow or non-deterministic (model inference, remote
//! services). [`MockCollaborators`] answers every call from fixed values so
//! score arithmetic can be asserted exactly, and each collaborator can be
//! switched to fail to exercise the fallback paths.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use commscore::testkit::{MockCollaborators, SIMPLE_SENTENCE};
//!
//! #[test]
//! fn test_clean_sentence() {
//!     let result = MockCollaborators::new().aggregator().analyze(SIMPLE_SENTENCE);
//!     assert_eq!(result.scores.grammar, 0.95);
//! }
//! ```

pub mod assertions;
pub mod helpers;
pub mod mock_env;

// Note: Assertion macros are exported at crate root via #[macro_export]
pub use helpers::{ConfigBuilder, SHORT_SPEECH, SIMPLE_SENTENCE, TEN_WORD_TEXT};
pub use mock_env::{Correction, MockCollaborators, SentenceLayout};
