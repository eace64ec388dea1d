//! Value objects produced by the scoring pipeline.
//!
//! Everything here is created fresh per analyzed text and never mutated
//! once handed back to the caller.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// CEFR proficiency bucket, ordered from easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl CefrLevel {
    pub const ALL: [CefrLevel; 6] = [
        CefrLevel::A1,
        CefrLevel::A2,
        CefrLevel::B1,
        CefrLevel::B2,
        CefrLevel::C1,
        CefrLevel::C2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1 => "C1",
            CefrLevel::C2 => "C2",
        }
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A word whose complexity exceeded the configured threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexWord {
    pub word: String,
    pub complexity: f64,
    pub cefr_level: CefrLevel,
}

/// Lexical metrics for one input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyProfile {
    /// Type-token ratio over alphabetic, non-stop-word tokens
    pub lexical_diversity: f64,
    /// Mean word complexity
    pub sophistication: f64,
    /// Mean cosine similarity between words and their sentence centroid
    pub context_appropriateness: f64,
    pub unique_words: BTreeSet<String>,
    pub total_words: usize,
    pub cefr_levels: BTreeMap<CefrLevel, usize>,
    /// At most `max_complex_words` entries, most complex first
    pub complex_words: Vec<ComplexWord>,
}

impl VocabularyProfile {
    /// Profile for text with no scorable words.
    pub fn empty() -> Self {
        Self {
            lexical_diversity: 0.0,
            sophistication: 0.0,
            context_appropriateness: 0.0,
            unique_words: BTreeSet::new(),
            total_words: 0,
            cefr_levels: empty_cefr_counts(),
            complex_words: Vec::new(),
        }
    }

    /// Unweighted mean of the three scalar metrics (unclamped).
    pub fn scalar(&self) -> f64 {
        (self.lexical_diversity + self.sophistication + self.context_appropriateness) / 3.0
    }
}

/// CEFR count map with every level present at zero.
pub fn empty_cefr_counts() -> BTreeMap<CefrLevel, usize> {
    CefrLevel::ALL.iter().map(|level| (*level, 0)).collect()
}

/// Normalized sub-scores and their combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBundle {
    pub grammar: f64,
    pub vocabulary: f64,
    pub fluency: f64,
    pub coherence: f64,
    pub overall: f64,
}

impl ScoreBundle {
    /// Scores reported when there was nothing to analyze.
    pub fn zero() -> Self {
        Self {
            grammar: 0.0,
            vocabulary: 0.0,
            fluency: 0.0,
            coherence: 0.0,
            overall: 0.0,
        }
    }

    /// Sub-scores paired with their display names, in report order.
    pub fn sub_scores(&self) -> [(&'static str, f64); 4] {
        [
            ("Grammar", self.grammar),
            ("Vocabulary", self.vocabulary),
            ("Fluency", self.fluency),
            ("Coherence", self.coherence),
        ]
    }
}

/// Ordered, human-readable feedback lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackBundle {
    items: Vec<String>,
}

impl FeedbackBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<String>> for FeedbackBundle {
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}

/// Pipeline stage a degradation is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringModule {
    Lexical,
    Grammar,
    Fluency,
    Coherence,
    Suggestion,
}

impl ScoringModule {
    pub fn name(&self) -> &'static str {
        match self {
            ScoringModule::Lexical => "vocabulary",
            ScoringModule::Grammar => "grammar",
            ScoringModule::Fluency => "fluency",
            ScoringModule::Coherence => "coherence",
            ScoringModule::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for ScoringModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Record of a collaborator failure that was replaced by a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degradation {
    pub module: ScoringModule,
    pub collaborator: String,
    pub reason: String,
}

impl Degradation {
    pub fn new(
        module: ScoringModule,
        collaborator: impl Into<String>,
        reason: impl fmt::Display,
    ) -> Self {
        Self {
            module,
            collaborator: collaborator.into(),
            reason: reason.to_string(),
        }
    }
}

/// A module result together with the fallbacks taken to produce it.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleOutcome<T> {
    pub value: T,
    pub degradations: Vec<Degradation>,
}

impl<T> ModuleOutcome<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            degradations: Vec::new(),
        }
    }

    pub fn with_degradations(value: T, degradations: Vec<Degradation>) -> Self {
        Self {
            value,
            degradations,
        }
    }

    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }
}

/// Grammar issue list plus the corrector's rewrite of the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarIssues {
    pub issues: Vec<String>,
    pub corrected_text: String,
}

impl GrammarIssues {
    pub fn none(text: &str) -> Self {
        Self {
            issues: Vec::new(),
            corrected_text: text.to_string(),
        }
    }
}

/// Complete, structurally stable answer handed to the API/report layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub text: String,
    pub scores: ScoreBundle,
    pub feedback: FeedbackBundle,
    pub vocabulary: VocabularyProfile,
    pub grammar_issues: Vec<String>,
    pub corrected_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub degradations: Vec<Degradation>,
    /// Set when the input was empty and nothing was scored
    pub no_data: bool,
}

impl AnalysisResult {
    /// Result for empty or whitespace-only input.
    pub fn no_data(text: &str) -> Self {
        Self {
            text: text.to_string(),
            scores: ScoreBundle::zero(),
            feedback: FeedbackBundle::new(),
            vocabulary: VocabularyProfile::empty(),
            grammar_issues: Vec::new(),
            corrected_text: text.to_string(),
            suggestion: None,
            degradations: Vec::new(),
            no_data: true,
        }
    }

    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }
}
