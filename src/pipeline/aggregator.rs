//! Score aggregation.
//!
//! Runs the four scoring modules over one text, combines their sub-scores
//! and assembles the typed [`AnalysisResult`].

use super::collaborators::Collaborators;
use super::feedback::build_feedback;
use crate::config::{validate_config_result, CommscoreConfig};
use crate::core::{
    AnalysisResult, Degradation, Error, FeedbackBundle, GrammarIssues, ModuleOutcome, Result,
    ScoreBundle, ScoringModule, VocabularyProfile,
};
use crate::io::SentenceEmbedder;
use crate::lexical::{compute_vocabulary_profile, LexicalResources};
use crate::scoring::{
    clamp_score, compute_coherence_score, compute_fluency_score, compute_grammar_score,
    extract_grammar_issues,
};
use tracing::{debug, info, info_span, warn};

/// Suggestion text used when the generator fails.
pub const SUGGESTION_UNAVAILABLE: &str = "Unable to generate feedback at this time.";

struct GrammarOutcome {
    extracted: ModuleOutcome<GrammarIssues>,
    score: ModuleOutcome<f64>,
}

/// Stateless scoring pipeline over injected collaborators.
///
/// Safe to share across threads; each call is independent.
#[derive(Debug, Clone)]
pub struct Aggregator {
    collaborators: Collaborators,
    config: CommscoreConfig,
}

impl Aggregator {
    /// Build an aggregator, rejecting invalid configuration.
    pub fn new(collaborators: Collaborators, config: CommscoreConfig) -> Result<Self> {
        validate_config_result(&config)?;
        Ok(Self {
            collaborators,
            config,
        })
    }

    /// Aggregator with the default configuration.
    pub fn with_defaults(collaborators: Collaborators) -> Self {
        Self {
            collaborators,
            config: CommscoreConfig::default(),
        }
    }

    pub fn config(&self) -> &CommscoreConfig {
        &self.config
    }

    pub fn collaborators(&self) -> &Collaborators {
        &self.collaborators
    }

    /// Scores and feedback for `text`.
    pub fn aggregate(&self, text: &str) -> (ScoreBundle, FeedbackBundle) {
        let result = self.analyze(text);
        (result.scores, result.feedback)
    }

    /// Full analysis of `text`.
    ///
    /// Never fails: collaborator failures degrade the affected module to its
    /// documented default and are listed in `degradations`. Empty input
    /// yields [`AnalysisResult::no_data`].
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let _span = info_span!("analyze", text_len = text.len()).entered();

        if text.trim().is_empty() {
            debug!("Empty input, nothing to score");
            return AnalysisResult::no_data(text);
        }

        let ((lexical, grammar), (fluency, coherence)) = if self.config.pipeline.parallel {
            rayon::join(
                || rayon::join(|| self.run_lexical(text), || self.run_grammar(text)),
                || rayon::join(|| self.run_fluency(text), || self.run_coherence(text)),
            )
        } else {
            (
                (self.run_lexical(text), self.run_grammar(text)),
                (self.run_fluency(text), self.run_coherence(text)),
            )
        };

        let (suggestion, suggestion_degradation) = self.run_suggestion(text);

        let floor = self.config.scoring.floor;
        let vocabulary = clamp_score(lexical.value.scalar(), floor);
        let grammar_score = grammar.score.value;
        let weights = &self.config.scoring.weights;
        let overall = clamp_score(
            weights.combine(grammar_score, vocabulary, fluency.value, coherence.value),
            floor,
        );

        let scores = ScoreBundle {
            grammar: grammar_score,
            vocabulary,
            fluency: fluency.value,
            coherence: coherence.value,
            overall,
        };

        let degradations: Vec<Degradation> = lexical
            .degradations
            .into_iter()
            .chain(grammar.extracted.degradations)
            .chain(grammar.score.degradations)
            .chain(fluency.degradations)
            .chain(coherence.degradations)
            .chain(suggestion_degradation)
            .collect();

        let grammar_issues = grammar.extracted.value;

        let feedback = build_feedback(
            &grammar_issues,
            &lexical.value,
            &degradations,
            &self.config.feedback,
        );

        info!(
            overall = scores.overall,
            grammar = scores.grammar,
            vocabulary = scores.vocabulary,
            fluency = scores.fluency,
            coherence = scores.coherence,
            degraded = !degradations.is_empty(),
            "Analysis complete"
        );

        AnalysisResult {
            text: text.to_string(),
            scores,
            feedback,
            vocabulary: lexical.value,
            grammar_issues: grammar_issues.issues,
            corrected_text: grammar_issues.corrected_text,
            suggestion,
            degradations,
            no_data: false,
        }
    }

    /// Transcribe `audio` and analyze the transcript.
    pub fn analyze_audio(&self, audio: &[u8]) -> Result<AnalysisResult> {
        let _span = info_span!("analyze_audio", bytes = audio.len()).entered();

        let transcriber = self
            .collaborators
            .transcriber
            .as_ref()
            .ok_or_else(|| Error::Transcription("no transcriber configured".to_string()))?;

        if audio.is_empty() {
            return Err(Error::Transcription("no audio provided".to_string()));
        }

        let text = transcriber
            .transcribe(audio)
            .map_err(|e| Error::Transcription(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(Error::Transcription("could not transcribe audio".to_string()));
        }

        Ok(self.analyze(&text))
    }

    fn run_lexical(&self, text: &str) -> ModuleOutcome<VocabularyProfile> {
        let resources = LexicalResources {
            frequency: self.collaborators.frequency.as_ref(),
            syllables: self.collaborators.syllables.as_ref(),
            senses: self.collaborators.senses.as_ref(),
            embeddings: self.collaborators.word_embedder.as_ref(),
        };
        compute_vocabulary_profile(text, &resources, &self.config.lexical)
    }

    fn run_grammar(&self, text: &str) -> GrammarOutcome {
        let extracted = extract_grammar_issues(text, self.collaborators.corrector.as_ref());
        let score = compute_grammar_score(
            text,
            self.collaborators.grammar_checker.as_ref(),
            &extracted,
            &self.config.grammar,
            self.config.scoring.floor,
        );
        GrammarOutcome { extracted, score }
    }

    fn run_fluency(&self, text: &str) -> ModuleOutcome<f64> {
        compute_fluency_score(
            text,
            self.collaborators.readability.as_ref(),
            self.collaborators.perplexity.as_ref(),
            &self.config.fluency,
            self.config.scoring.floor,
        )
    }

    fn run_coherence(&self, text: &str) -> ModuleOutcome<f64> {
        let sources: [(&'static str, &dyn SentenceEmbedder); 2] = [
            ("sentence embedder", self.collaborators.sentence_embedder.as_ref()),
            ("contextual embedder", self.collaborators.contextual_embedder.as_ref()),
        ];
        compute_coherence_score(
            text,
            &sources,
            &self.config.coherence,
            self.config.scoring.floor,
        )
    }

    fn run_suggestion(&self, text: &str) -> (Option<String>, Option<Degradation>) {
        let Some(generator) = &self.collaborators.suggestion else {
            return (None, None);
        };

        match generator.suggest(text) {
            Ok(suggestion) => (Some(suggestion), None),
            Err(err) => {
                warn!(error = %err, "Suggestion generator failed");
                (
                    Some(SUGGESTION_UNAVAILABLE.to_string()),
                    Some(Degradation::new(
                        ScoringModule::Suggestion,
                        "suggestion generator",
                        err,
                    )),
                )
            }
        }
    }
}
