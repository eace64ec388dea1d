//! Word sense counts (number of distinct dictionary meanings).

use crate::core::{CollaboratorError, Error, Result};
use crate::io::traits::{CollaboratorResult, SenseInventory};
use std::collections::HashMap;
use std::path::Path;

/// Sense-count table loaded from `word<TAB>count` lines.
///
/// Words absent from the table have zero recorded senses.
#[derive(Debug, Clone, Default)]
pub struct SenseTable {
    counts: HashMap<String, u32>,
}

impl SenseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `word<whitespace>count` lines; malformed lines are skipped.
    pub fn from_tsv(contents: &str) -> Self {
        let counts = contents
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .filter_map(|line| {
                let mut fields = line.split_whitespace();
                let word = fields.next()?.to_lowercase();
                let count = fields.next()?.parse::<u32>().ok()?;
                Some((word, count))
            })
            .collect();
        Self { counts }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::file_system("Failed to read sense table", path, e))?;
        Ok(Self::from_tsv(&contents))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl SenseInventory for SenseTable {
    fn sense_count(&self, word: &str) -> CollaboratorResult<u32> {
        if word.is_empty() {
            return Err(CollaboratorError::MissingEntry(String::new()));
        }
        Ok(self.counts.get(&word.to_lowercase()).copied().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tsv() {
        let table = SenseTable::from_tsv("# word\tsenses\nrun\t57\nset 45\nbroken\n");
        assert_eq!(table.len(), 2);
        assert_eq!(table.sense_count("Run"), Ok(57));
        assert_eq!(table.sense_count("zebra"), Ok(0));
    }
}
