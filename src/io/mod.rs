pub mod output;
pub mod traits;

// Re-export collaborator traits for convenient access
pub use output::{create_writer, OutputFormat, OutputWriter};
pub use traits::{
    CollaboratorResult, FrequencyRanker, GrammarChecker, GrammarFinding, PerplexityScorer,
    ReadabilityScorer, SenseInventory, SentenceEmbedder, SuggestionGenerator, SyllableCounter,
    TextCorrector, Transcriber, WordEmbedder,
};

use crate::core::{Error, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::file_system("Failed to read file", path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::file_system("Failed to write file", path, e))
}
