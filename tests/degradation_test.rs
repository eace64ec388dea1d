//! Collaborator failures degrade individual modules, never the whole call.

use commscore::core::{Error, ScoringModule};
use commscore::pipeline::SUGGESTION_UNAVAILABLE;
use commscore::testkit::{MockCollaborators, SHORT_SPEECH, SIMPLE_SENTENCE};
use commscore::{assert_contains_error, assert_result_ok, assert_score_in_range};

fn modules(result: &commscore::AnalysisResult) -> Vec<ScoringModule> {
    let mut modules: Vec<ScoringModule> = result.degradations.iter().map(|d| d.module).collect();
    modules.sort();
    modules.dedup();
    modules
}

#[test]
fn test_checker_and_corrector_down_uses_grammar_fallback() {
    let result = MockCollaborators::new()
        .with_failing_checker()
        .with_failing_corrector()
        .aggregator()
        .analyze(SIMPLE_SENTENCE);

    assert_eq!(result.scores.grammar, 0.5);
    assert_eq!(result.corrected_text, SIMPLE_SENTENCE);
    assert!(result.grammar_issues.is_empty());
    assert_eq!(modules(&result), vec![ScoringModule::Grammar]);
    assert_eq!(
        result.feedback.items().last().map(String::as_str),
        Some("Analysis degraded: grammar")
    );
}

#[test]
fn test_checker_down_counts_corrector_diff() {
    let text = "She go to the market every day and buys fresh bread with her \
                friends before the long walk back home.";
    let corrected = "She goes to the market every day and buys fresh bread with her \
                     friends before the long walk back home.";
    let result = MockCollaborators::new()
        .with_failing_checker()
        .with_correction(corrected)
        .aggregator()
        .analyze(text);

    // one diff over twenty words
    assert!((result.scores.grammar - 0.5).abs() < 1e-12);
    assert_eq!(result.grammar_issues.len(), 1);
}

#[test]
fn test_both_embedders_down_uses_coherence_fallback() {
    let result = MockCollaborators::new()
        .with_failing_sentence_embedder()
        .with_failing_contextual_embedder()
        .aggregator()
        .analyze(SHORT_SPEECH);

    assert_eq!(result.scores.coherence, 0.5);
    assert_eq!(
        result
            .degradations
            .iter()
            .filter(|d| d.module == ScoringModule::Coherence)
            .count(),
        2
    );
}

#[test]
fn test_one_embedder_down_uses_the_other() {
    let result = MockCollaborators::new()
        .with_failing_contextual_embedder()
        .aggregator()
        .analyze(SHORT_SPEECH);

    assert_eq!(result.scores.coherence, 1.0);
    assert!(result.is_degraded());
    assert_eq!(result.degradations[0].collaborator, "contextual embedder");
}

#[test]
fn test_fluency_terms_fall_back_independently() {
    let result = MockCollaborators::new()
        .with_failing_perplexity()
        .aggregator()
        .analyze(SIMPLE_SENTENCE);
    // readability 0.4, perplexity fallback 0.5
    assert_eq!(result.scores.fluency, 0.45);

    let result = MockCollaborators::new()
        .with_failing_perplexity()
        .with_failing_readability()
        .aggregator()
        .analyze(SIMPLE_SENTENCE);
    assert_eq!(result.scores.fluency, 0.5);
    assert_eq!(modules(&result), vec![ScoringModule::Fluency]);
}

#[test]
fn test_lexicon_down_keeps_counts() {
    let result = MockCollaborators::new()
        .with_failing_lexicon()
        .aggregator()
        .analyze(SIMPLE_SENTENCE);

    assert_eq!(result.vocabulary.total_words, 3);
    assert_eq!(result.vocabulary.lexical_diversity, 1.0);
    assert_eq!(result.vocabulary.sophistication, 0.0);
    assert_eq!(result.vocabulary.cefr_levels.values().sum::<usize>(), 0);
    assert!(result.vocabulary.complex_words.is_empty());
    assert_eq!(modules(&result), vec![ScoringModule::Lexical]);
    assert_score_in_range!(result.scores.vocabulary);
}

#[test]
fn test_word_embedder_down_zeroes_context() {
    let result = MockCollaborators::new()
        .with_failing_word_embedder()
        .aggregator()
        .analyze(SIMPLE_SENTENCE);
    assert_eq!(result.vocabulary.context_appropriateness, 0.0);
    assert_eq!(result.degradations.len(), 1);
    assert_eq!(result.degradations[0].collaborator, "word embedder");
}

#[test]
fn test_everything_down_still_returns_bounded_result() {
    let result = MockCollaborators::new()
        .with_failing_checker()
        .with_failing_corrector()
        .with_failing_sentence_embedder()
        .with_failing_contextual_embedder()
        .with_failing_word_embedder()
        .with_failing_lexicon()
        .with_failing_perplexity()
        .with_failing_readability()
        .with_failing_suggestion()
        .aggregator()
        .analyze(SHORT_SPEECH);

    for (_, score) in result.scores.sub_scores() {
        assert_score_in_range!(score);
    }
    assert_score_in_range!(result.scores.overall);
    assert_eq!(
        result.feedback.items().last().map(String::as_str),
        Some("Analysis degraded: vocabulary, grammar, fluency, coherence, suggestion")
    );
}

#[test]
fn test_suggestion_success_and_failure() {
    let result = MockCollaborators::new()
        .with_suggestion("Try varying your sentence openings.")
        .aggregator()
        .analyze(SIMPLE_SENTENCE);
    assert_eq!(
        result.suggestion.as_deref(),
        Some("Try varying your sentence openings.")
    );
    assert!(!result.is_degraded());

    let result = MockCollaborators::new()
        .with_failing_suggestion()
        .aggregator()
        .analyze(SIMPLE_SENTENCE);
    assert_eq!(result.suggestion.as_deref(), Some(SUGGESTION_UNAVAILABLE));
    assert_eq!(modules(&result), vec![ScoringModule::Suggestion]);
}

#[test]
fn test_audio_is_transcribed_then_scored() {
    let aggregator = MockCollaborators::new()
        .with_transcript(SIMPLE_SENTENCE)
        .aggregator();
    let result = assert_result_ok!(aggregator.analyze_audio(b"fake wav bytes"));
    assert_eq!(result.text, SIMPLE_SENTENCE);
    assert_eq!(result.scores.grammar, 0.95);
}

#[test]
fn test_audio_failures_are_transcription_errors() {
    let failing = MockCollaborators::new().with_failing_transcriber().aggregator();
    let err = assert_contains_error!(failing.analyze_audio(b"bytes"), "Transcription error");
    assert!(matches!(err, Error::Transcription(_)));

    let silent = MockCollaborators::new().with_transcript("   ").aggregator();
    assert_contains_error!(silent.analyze_audio(b"bytes"), "could not transcribe");

    let no_audio = MockCollaborators::new().with_transcript("hello").aggregator();
    assert_contains_error!(no_audio.analyze_audio(b""), "no audio");

    let missing = MockCollaborators::new().aggregator();
    assert_contains_error!(missing.analyze_audio(b"bytes"), "no transcriber");
}

#[test]
fn test_contentless_sentence_is_not_a_coherence_failure() {
    let aggregator = commscore::Aggregator::with_defaults(commscore::Collaborators::offline(10_001));

    for text in [
        "We walked to the river. 42! Then we went home happily.",
        "We walked to the river. ?! Then we went home happily.",
    ] {
        let result = aggregator.analyze(text);
        assert!(!modules(&result).contains(&ScoringModule::Coherence), "{text}");
        assert!(
            result.feedback.iter().all(|line| !line.starts_with("Analysis degraded")),
            "{text}: {:?}",
            result.feedback
        );
        assert_score_in_range!(result.scores.coherence);
    }
}
