//! Configuration for the scoring pipeline, loaded from `.commscore.toml`.

mod analysis;
mod core;
mod loader;
mod scoring;
mod thresholds;
pub mod validation;

pub use analysis::{
    CoherenceConfig, FeedbackConfig, FluencyConfig, GrammarConfig, GrammarStrategy, LexicalConfig,
    PipelineConfig,
};
pub use self::core::CommscoreConfig;
pub use loader::{
    directory_ancestors, load_config, load_config_from_dir, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use scoring::{ScoringSettings, ScoringWeights};
pub use thresholds::{CefrThresholds, ComplexityNormalizers, LabelThresholds};
pub use validation::{validate_config, validate_config_result, ConfigIssue};

/// Default configuration file contents written by `commscore init`
pub fn default_config_toml() -> String {
    r#"# Commscore Configuration

[lexical]
complex_word_threshold = 0.6
max_complex_words = 10
out_of_vocabulary_rank = 10001

[lexical.normalizers]
length = 12.0
syllables = 5.0
frequency_rank = 10000.0
senses = 10.0

[lexical.cefr]
a1 = 1000
a2 = 2000
b1 = 3500
b2 = 5000
c1 = 7000

[grammar]
# "issue_density" or "blended"
strategy = "issue_density"
no_issue_score = 0.95
words_per_issue = 10.0
fallback_score = 0.5

[fluency]
perplexity_scale = 1000.0
readability_fallback = 0.5
perplexity_fallback = 0.5

[coherence]
single_sentence_score = 0.7
fallback_score = 0.5

[scoring]
floor = 0.1

[scoring.weights]
grammar = 0.25
vocabulary = 0.25
fluency = 0.25
coherence = 0.25

[labels]
excellent = 0.8
good = 0.6

[feedback]
max_items = 3

[pipeline]
parallel = true
"#
    .to_string()
}
