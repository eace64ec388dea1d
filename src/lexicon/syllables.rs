//! Syllable counting: pronunciation dictionary with a vowel-cluster fallback.

use crate::core::{CollaboratorError, Error, Result};
use crate::io::traits::{CollaboratorResult, SyllableCounter};
use std::collections::HashMap;
use std::path::Path;

/// Estimate syllables from vowel clusters.
///
/// Counts runs of `aeiouy`, drops a silent trailing `e` (but not `-le`), and
/// never returns less than one for a non-empty word.
pub fn heuristic_syllables(word: &str) -> u32 {
    let lower: Vec<char> = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect();
    if lower.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut count = 0u32;
    let mut previous_vowel = false;
    for &c in &lower {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    let len = lower.len();
    let silent_e = len > 2
        && lower[len - 1] == 'e'
        && !is_vowel(lower[len - 2])
        && !(lower[len - 2] == 'l' && !is_vowel(lower[len - 3]));
    if silent_e && count > 1 {
        count -= 1;
    }

    count.max(1)
}

/// Pronunciation dictionary lookups with heuristic fallback for unknown words.
#[derive(Debug, Clone, Default)]
pub struct SyllableDictionary {
    entries: HashMap<String, u32>,
}

impl SyllableDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse CMU-dict style lines: `WORD  PH1 PH2 ...`.
    ///
    /// Stressed vowels carry a digit, so the syllable count is the number of
    /// phones ending in a digit. Alternate pronunciations (`WORD(2)`) are skipped.
    pub fn from_cmudict(contents: &str) -> Self {
        let entries = contents
            .lines()
            .filter(|line| !line.starts_with(";;;"))
            .filter_map(|line| {
                let mut fields = line.split_whitespace();
                let word = fields.next()?;
                if word.contains('(') {
                    return None;
                }
                let syllables = fields
                    .filter(|phone| phone.ends_with(|c: char| c.is_ascii_digit()))
                    .count() as u32;
                Some((word.to_lowercase(), syllables))
            })
            .collect();
        Self { entries }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::file_system("Failed to read pronunciation dictionary", path, e))?;
        Ok(Self::from_cmudict(&contents))
    }

    pub fn lookup(&self, word: &str) -> Option<u32> {
        self.entries.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SyllableCounter for SyllableDictionary {
    fn syllable_count(&self, word: &str) -> CollaboratorResult<u32> {
        let lower = word.to_lowercase();
        if let Some(count) = self.lookup(&lower) {
            return Ok(count);
        }
        match heuristic_syllables(&lower) {
            0 => Err(CollaboratorError::MissingEntry(word.to_string())),
            count => Ok(count),
        }
    }
}
