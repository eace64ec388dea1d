//! Word and sentence segmentation.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}']+").unwrap());

/// English stop words.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "almost", "alone", "along",
        "already", "also", "although", "always", "am", "among", "an", "and", "another", "any",
        "anyone", "anything", "are", "around", "as", "at", "be", "became", "because", "become",
        "been", "before", "being", "below", "between", "both", "but", "by", "can", "cannot",
        "could", "did", "do", "does", "doing", "done", "down", "during", "each", "either",
        "else", "enough", "even", "ever", "every", "few", "for", "from", "further", "get",
        "give", "go", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
        "him", "himself", "his", "how", "however", "i", "if", "in", "into", "is", "it", "its",
        "itself", "just", "keep", "last", "least", "less", "made", "make", "many", "may", "me",
        "might", "more", "most", "much", "must", "my", "myself", "neither", "never", "no",
        "nobody", "none", "nor", "not", "nothing", "now", "of", "off", "often", "on", "once",
        "one", "only", "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out",
        "over", "own", "per", "perhaps", "put", "quite", "rather", "really", "said", "same",
        "say", "see", "seem", "seemed", "several", "she", "should", "show", "since", "so",
        "some", "someone", "something", "sometimes", "still", "such", "take", "than", "that",
        "the", "their", "theirs", "them", "themselves", "then", "there", "therefore", "these",
        "they", "this", "those", "though", "through", "thus", "to", "together", "too", "toward",
        "under", "until", "up", "upon", "us", "used", "using", "very", "via", "was", "we",
        "well", "were", "what", "whatever", "when", "where", "whether", "which", "while", "who",
        "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
        "would", "yet", "you", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// A lowercased word token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Every character is a letter
    pub is_alpha: bool,
}

impl Token {
    pub fn is_stop_word(&self) -> bool {
        is_stop_word(&self.text)
    }

    /// Alphabetic and not a stop word
    pub fn is_content_word(&self) -> bool {
        self.is_alpha && !self.is_stop_word()
    }
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Split text into lowercased word tokens.
///
/// Tokens are runs of letters, digits and apostrophes with surrounding
/// apostrophes trimmed, so contractions such as "don't" stay whole and are
/// not alphabetic.
pub fn tokenize(text: &str) -> Vec<Token> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().trim_matches('\''))
        .filter(|word| !word.is_empty())
        .map(|word| {
            let text = word.to_lowercase();
            let is_alpha = text.chars().all(char::is_alphabetic);
            Token { text, is_alpha }
        })
        .collect()
}

/// Lowercased alphabetic, non-stop-word tokens.
pub fn content_words(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(Token::is_content_word)
        .map(|token| token.text)
        .collect()
}

/// Split text after `.`, `!` or `?` followed by whitespace.
///
/// Fragments are trimmed and empty ones dropped; terminal punctuation stays
/// attached to its sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        if let Some(&(next_idx, next)) = chars.peek() {
            if next.is_whitespace() {
                push_sentence(&mut sentences, &text[start..next_idx]);
                start = next_idx;
            }
        }
    }
    push_sentence(&mut sentences, &text[start..]);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

/// Whitespace-separated word count, as used for length normalization.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
