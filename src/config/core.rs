use serde::{Deserialize, Serialize};

use super::analysis::{
    CoherenceConfig, FeedbackConfig, FluencyConfig, GrammarConfig, LexicalConfig, PipelineConfig,
};
use super::scoring::ScoringSettings;
use super::thresholds::LabelThresholds;

/// Root configuration structure for commscore
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommscoreConfig {
    /// Lexical metrics engine settings
    #[serde(default)]
    pub lexical: LexicalConfig,

    /// Grammar scoring settings
    #[serde(default)]
    pub grammar: GrammarConfig,

    /// Fluency scoring settings
    #[serde(default)]
    pub fluency: FluencyConfig,

    /// Coherence scoring settings
    #[serde(default)]
    pub coherence: CoherenceConfig,

    /// Aggregation weights and score floor
    #[serde(default)]
    pub scoring: ScoringSettings,

    /// Qualitative label boundaries
    #[serde(default)]
    pub labels: LabelThresholds,

    /// Feedback assembly settings
    #[serde(default)]
    pub feedback: FeedbackConfig,

    /// Pipeline execution settings
    #[serde(default)]
    pub pipeline: PipelineConfig,
}
