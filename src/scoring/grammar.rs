//! Grammar scoring.
//!
//! Two collaborators feed this module: a corrector that rewrites the text
//! (diffed against the original to list issues) and a checker that counts
//! issues directly. The checker's count drives the score; the diff is the
//! fallback when the checker is unavailable.

use super::normalize::clamp_score;
use crate::config::{GrammarConfig, GrammarStrategy};
use crate::core::{Degradation, GrammarIssues, ModuleOutcome, ScoringModule};
use crate::io::{GrammarChecker, TextCorrector};
use crate::lexicon::{split_sentences, word_count};
use tracing::{debug, info_span, warn};

const CORRECTOR: &str = "text corrector";
const CHECKER: &str = "grammar checker";

/// Ask the corrector for a rewrite and list the differences as issues.
///
/// On corrector failure the corrected text is the original and the issue
/// list is empty.
pub fn extract_grammar_issues(
    text: &str,
    corrector: &dyn TextCorrector,
) -> ModuleOutcome<GrammarIssues> {
    match corrector.correct(text) {
        Ok(corrected_text) => {
            let issues = diff_grammar_issues(text, &corrected_text);
            debug!(issues = issues.len(), "Grammar issues extracted from correction");
            ModuleOutcome::clean(GrammarIssues {
                issues,
                corrected_text,
            })
        }
        Err(err) => {
            warn!(collaborator = CORRECTOR, error = %err, "Text correction failed");
            ModuleOutcome::with_degradations(
                GrammarIssues::none(text),
                vec![Degradation::new(ScoringModule::Grammar, CORRECTOR, err)],
            )
        }
    }
}

/// Describe how `corrected` differs from `original`.
///
/// Sentences are paired positionally and words compared case-insensitively.
/// Each differing word yields `'orig' → 'corr' in 'context'` with up to two
/// words of context either side; a differing sentence without a word-level
/// change yields a sentence-structure message. Text that changed without
/// any pairable difference yields one general message.
pub fn diff_grammar_issues(original: &str, corrected: &str) -> Vec<String> {
    let mut issues = Vec::new();

    for (orig, corr) in split_sentences(original)
        .iter()
        .zip(split_sentences(corrected).iter())
    {
        if orig.to_lowercase() == corr.to_lowercase() {
            continue;
        }

        let orig_words: Vec<&str> = orig.split_whitespace().collect();
        let corr_words: Vec<&str> = corr.split_whitespace().collect();
        let before = issues.len();

        for (j, (o_word, c_word)) in orig_words.iter().zip(corr_words.iter()).enumerate() {
            if o_word.to_lowercase() != c_word.to_lowercase() {
                let start = j.saturating_sub(2);
                let end = (j + 3).min(orig_words.len());
                let context = orig_words[start..end].join(" ");
                issues.push(format!("'{o_word}' → '{c_word}' in '{context}'"));
            }
        }

        if issues.len() == before {
            issues.push(format!("Sentence structure: '{orig}' → '{corr}'"));
        }
    }

    if issues.is_empty() && original.to_lowercase() != corrected.to_lowercase() {
        issues.push("General grammar and structure improvements".to_string());
    }

    issues
}

/// Grammar score under the `issue_density` strategy.
///
/// Clean text scores `no_issue_score`; otherwise issues are normalized per
/// `words_per_issue` words and subtracted from one.
pub fn issue_density_score(issues: usize, words: usize, config: &GrammarConfig, floor: f64) -> f64 {
    if words == 0 {
        return floor;
    }
    if issues == 0 {
        return clamp_score(config.no_issue_score, floor);
    }
    let normalized = (issues as f64 / (words as f64 / config.words_per_issue)).min(1.0);
    clamp_score(1.0 - normalized, floor)
}

/// Grammar score under the `blended` strategy: issue rate averaged with
/// how much the corrector changed the word count.
pub fn blended_score(issues: usize, words: usize, corrected_words: usize, floor: f64) -> f64 {
    let denominator = words as f64 + 1.0;
    let base = 1.0 - (issues as f64 / denominator).min(1.0);
    let drift = corrected_words.abs_diff(words).min(words) as f64;
    let secondary = 1.0 - drift / denominator;
    clamp_score(0.5 * base + 0.5 * secondary, floor)
}

/// Compute the grammar sub-score.
///
/// `extracted` is the outcome of [`extract_grammar_issues`]; its issue
/// count stands in for the checker when the checker fails. When both fail
/// the configured fallback score is used.
pub fn compute_grammar_score(
    text: &str,
    checker: &dyn GrammarChecker,
    extracted: &ModuleOutcome<GrammarIssues>,
    config: &GrammarConfig,
    floor: f64,
) -> ModuleOutcome<f64> {
    let _span = info_span!("grammar_score").entered();
    let words = word_count(text);
    let mut degradations = Vec::new();

    let issue_count = match checker.check(text) {
        Ok(findings) => findings.len(),
        Err(err) => {
            degradations.push(Degradation::new(ScoringModule::Grammar, CHECKER, &err));
            if extracted.is_degraded() {
                warn!(
                    error = %err,
                    fallback = config.fallback_score,
                    "Grammar checker and corrector both failed, using fallback score"
                );
                return ModuleOutcome::with_degradations(
                    clamp_score(config.fallback_score, floor),
                    degradations,
                );
            }
            warn!(error = %err, "Grammar checker failed, counting corrector differences");
            extracted.value.issues.len()
        }
    };

    let score = match config.strategy {
        GrammarStrategy::IssueDensity => issue_density_score(issue_count, words, config, floor),
        GrammarStrategy::Blended => blended_score(
            issue_count,
            words,
            word_count(&extracted.value.corrected_text),
            floor,
        ),
    };

    debug!(issue_count, words, score, "Grammar score computed");
    ModuleOutcome::with_degradations(score, degradations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CollaboratorError;
    use crate::io::{CollaboratorResult, GrammarFinding};
    use pretty_assertions::assert_eq;

    struct FixedChecker(usize);

    impl GrammarChecker for FixedChecker {
        fn check(&self, _text: &str) -> CollaboratorResult<Vec<GrammarFinding>> {
            Ok((0..self.0)
                .map(|i| GrammarFinding::new(format!("issue {i}"), None))
                .collect())
        }
    }

    struct DownChecker;

    impl GrammarChecker for DownChecker {
        fn check(&self, _text: &str) -> CollaboratorResult<Vec<GrammarFinding>> {
            Err(CollaboratorError::unavailable("checker offline"))
        }
    }

    struct Rewrite(&'static str);

    impl TextCorrector for Rewrite {
        fn correct(&self, _text: &str) -> CollaboratorResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct DownCorrector;

    impl TextCorrector for DownCorrector {
        fn correct(&self, _text: &str) -> CollaboratorResult<String> {
            Err(CollaboratorError::unavailable("corrector offline"))
        }
    }

    #[test]
    fn test_word_level_diff_with_context() {
        let issues = diff_grammar_issues(
            "She go to the market every day.",
            "She goes to the market every day.",
        );
        assert_eq!(issues, vec!["'go' → 'goes' in 'She go to the'"]);
    }

    #[test]
    fn test_case_only_changes_are_ignored() {
        assert!(diff_grammar_issues("hello there.", "Hello there.").is_empty());
    }

    #[test]
    fn test_sentence_structure_when_only_length_differs() {
        let issues = diff_grammar_issues("We went home", "We went home today");
        assert_eq!(
            issues,
            vec!["Sentence structure: 'We went home' → 'We went home today'"]
        );
    }

    #[test]
    fn test_general_message_when_sentences_do_not_pair() {
        let issues = diff_grammar_issues("Hi. Bye.", "Hi.");
        assert_eq!(issues, vec!["General grammar and structure improvements"]);
    }

    #[test]
    fn test_issue_density_examples() {
        let config = GrammarConfig::default();
        assert_eq!(issue_density_score(0, 6, &config, 0.1), 0.95);
        assert_eq!(issue_density_score(3, 10, &config, 0.1), 0.1);
        assert!((issue_density_score(1, 20, &config, 0.1) - 0.5).abs() < 1e-12);
        assert_eq!(issue_density_score(0, 0, &config, 0.1), 0.1);
    }

    #[test]
    fn test_constant_scores_respect_a_raised_floor() {
        let config = GrammarConfig::default();
        assert_eq!(issue_density_score(0, 6, &config, 0.97), 0.97);

        let text = "one two three";
        let extracted = extract_grammar_issues(text, &DownCorrector);
        let outcome = compute_grammar_score(text, &DownChecker, &extracted, &config, 0.8);
        assert_eq!(outcome.value, 0.8);
    }

    #[test]
    fn test_blended_score() {
        // base = 1 - 1/11, secondary = 1
        let score = blended_score(1, 10, 10, 0.1);
        assert!((score - (0.5 * (1.0 - 1.0 / 11.0) + 0.5)).abs() < 1e-12);
        assert_eq!(blended_score(50, 10, 0, 0.1), 0.1);
    }

    #[test]
    fn test_checker_count_drives_score() {
        let text = "one two three four five six seven eight nine ten";
        let extracted = extract_grammar_issues(text, &Rewrite(text));
        let outcome = compute_grammar_score(
            text,
            &FixedChecker(3),
            &extracted,
            &GrammarConfig::default(),
            0.1,
        );
        assert_eq!(outcome.value, 0.1);
        assert!(!outcome.is_degraded());
    }

    #[test]
    fn test_checker_failure_uses_corrector_diff() {
        let text = "She go to the market every day and buys fresh bread with her \
                    friends before the long walk back home.";
        let extracted = extract_grammar_issues(
            text,
            &Rewrite(
                "She goes to the market every day and buys fresh bread with her \
                 friends before the long walk back home.",
            ),
        );
        let outcome =
            compute_grammar_score(text, &DownChecker, &extracted, &GrammarConfig::default(), 0.1);

        // 1 issue over 20 words
        assert_eq!(extracted.value.issues.len(), 1);
        assert!((outcome.value - 0.5).abs() < 1e-12);
        assert_eq!(outcome.degradations.len(), 1);
        assert_eq!(outcome.degradations[0].collaborator, "grammar checker");
    }

    #[test]
    fn test_both_failing_uses_fallback() {
        let text = "Anything at all.";
        let extracted = extract_grammar_issues(text, &DownCorrector);
        assert_eq!(extracted.value.corrected_text, text);
        assert!(extracted.value.issues.is_empty());

        let outcome =
            compute_grammar_score(text, &DownChecker, &extracted, &GrammarConfig::default(), 0.1);
        assert_eq!(outcome.value, 0.5);
        assert_eq!(outcome.degradations.len(), 1);
    }
}
