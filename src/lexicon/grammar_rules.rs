//! Rule-based grammar checker and corrector.
//!
//! Covers the mechanical errors that show up most in transcribed speech:
//! - repeated words ("the the")
//! - sentences starting in lowercase
//! - the pronoun "i" in lowercase
//! - "a"/"an" disagreeing with the following word

use super::tokenize::split_sentences;
use crate::common::capitalize_first;
use crate::io::traits::{CollaboratorResult, GrammarChecker, GrammarFinding, TextCorrector};

const AN_PREFIXES: &[&str] = &["hour", "honest", "honor", "honour", "heir"];
const A_PREFIXES: &[&str] = &["uni", "use", "usu", "one", "once", "eu", "ur"];

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedGrammar;

impl RuleBasedGrammar {
    pub fn new() -> Self {
        Self
    }

    /// Findings plus corrected text. Clean text is returned unchanged.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn review(&self, text: &str) -> (Vec<GrammarFinding>, String) {
        let mut findings = Vec::new();
        let corrected_sentences: Vec<String> = split_sentences(text)
            .iter()
            .map(|sentence| review_sentence(sentence, &mut findings))
            .collect();

        if findings.is_empty() {
            (findings, text.to_string())
        } else {
            (findings, corrected_sentences.join(" "))
        }
    }
}

impl GrammarChecker for RuleBasedGrammar {
    fn check(&self, text: &str) -> CollaboratorResult<Vec<GrammarFinding>> {
        Ok(self.review(text).0)
    }
}

impl TextCorrector for RuleBasedGrammar {
    fn correct(&self, text: &str) -> CollaboratorResult<String> {
        Ok(self.review(text).1)
    }
}

/// Lowercased word with surrounding punctuation removed.
fn core_of(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

fn ends_in_punctuation(word: &str) -> bool {
    word.chars().last().is_some_and(|c| !c.is_alphanumeric())
}

/// Article the following word takes, if it starts with a letter.
fn expected_article(next: &str) -> Option<&'static str> {
    let first = next.chars().next()?;
    if !first.is_alphabetic() {
        return None;
    }
    if AN_PREFIXES.iter().any(|p| next.starts_with(p)) {
        return Some("an");
    }
    if A_PREFIXES.iter().any(|p| next.starts_with(p)) {
        return Some("a");
    }
    if matches!(first, 'a' | 'e' | 'i' | 'o' | 'u') {
        Some("an")
    } else {
        Some("a")
    }
}

fn replace_core(word: &str, core: &str, replacement: &str) -> String {
    match word.to_lowercase().find(core) {
        Some(start) => format!(
            "{}{}{}",
            &word[..start],
            replacement,
            &word[start + core.len()..]
        ),
        None => replacement.to_string(),
    }
}

fn review_sentence(sentence: &str, findings: &mut Vec<GrammarFinding>) -> String {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    let mut corrected: Vec<String> = Vec::with_capacity(words.len());

    for (i, word) in words.iter().enumerate() {
        let core = core_of(word);

        if i > 0 && !core.is_empty() {
            let previous = words[i - 1];
            if core_of(previous) == core && !ends_in_punctuation(previous) {
                findings.push(GrammarFinding::new(
                    format!("Repeated word '{}'", core),
                    Some(String::new()),
                ));
                continue;
            }
        }

        let mut fixed = word.to_string();

        if core == "i" && word.contains('i') {
            fixed = fixed.replacen('i', "I", 1);
            findings.push(GrammarFinding::new(
                "The pronoun 'I' should be capitalized",
                Some("I".to_string()),
            ));
        }

        if (core == "a" || core == "an") && !ends_in_punctuation(word) {
            let expected = words
                .get(i + 1)
                .and_then(|next| expected_article(&core_of(next)));
            if let Some(expected) = expected.filter(|expected| *expected != core) {
                let replacement = if word.starts_with(char::is_uppercase) {
                    capitalize_first(expected)
                } else {
                    expected.to_string()
                };
                fixed = replace_core(word, &core, &replacement);
                findings.push(GrammarFinding::new(
                    format!(
                        "Use '{}' before '{}'",
                        expected,
                        core_of(words[i + 1])
                    ),
                    Some(replacement),
                ));
            }
        }

        if corrected.is_empty() && fixed.starts_with(char::is_lowercase) {
            fixed = capitalize_first(&fixed);
            findings.push(GrammarFinding::new(
                "Sentence should start with a capital letter",
                Some(fixed.clone()),
            ));
        }

        corrected.push(fixed);
    }

    corrected.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_text_is_unchanged() {
        let grammar = RuleBasedGrammar::new();
        let text = "The cat sat on the mat.  It was happy.";
        let (findings, corrected) = grammar.review(text);
        assert!(findings.is_empty());
        assert_eq!(corrected, text);
    }

    #[test]
    fn test_repeated_word_removed() {
        let (findings, corrected) = RuleBasedGrammar::new().review("The the cat sat.");
        assert_eq!(findings.len(), 1);
        assert_eq!(corrected, "The cat sat.");
    }

    #[test]
    fn test_lowercase_pronoun_and_sentence_start() {
        let (findings, corrected) = RuleBasedGrammar::new().review("yesterday i went home.");
        assert_eq!(findings.len(), 2);
        assert_eq!(corrected, "Yesterday I went home.");
    }

    #[test]
    fn test_article_agreement() {
        let (_, corrected) = RuleBasedGrammar::new().review("I ate a apple and an banana.");
        assert_eq!(corrected, "I ate an apple and a banana.");

        let (findings, _) = RuleBasedGrammar::new().review("It took an hour at a university.");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_capitalized_article_keeps_case() {
        let (_, corrected) = RuleBasedGrammar::new().review("A elephant walked.");
        assert_eq!(corrected, "An elephant walked.");
    }

    #[test]
    fn test_trait_impls_agree_with_review() {
        let grammar = RuleBasedGrammar::new();
        let text = "she said that that was fine.";
        assert_eq!(grammar.check(text).unwrap().len(), 2);
        assert_eq!(grammar.correct(text).unwrap(), "She said that was fine.");
    }
}
