use crate::cli;
use crate::config::{self, CommscoreConfig};
use crate::io::{self, create_writer};
use crate::lexicon::{FrequencyTable, SenseTable, SyllableDictionary};
use crate::observability::init_tracing;
use crate::pipeline::{Aggregator, Collaborators};
use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub corpus: Option<PathBuf>,
    pub word_ranks: Option<PathBuf>,
    pub senses: Option<PathBuf>,
    pub syllables: Option<PathBuf>,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub parallel: bool,
    pub verbosity: u8,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    init_tracing(config.verbosity);

    let mut settings = load_settings(config.config.as_deref())?;
    if !config.parallel {
        settings.pipeline.parallel = false;
    }

    let text = read_input(config.text.as_deref(), config.file.as_deref())?;
    let collaborators = build_collaborators(&config, &settings)?;
    let labels = settings.labels.clone();
    let aggregator = Aggregator::new(collaborators, settings)?;

    let result = aggregator.analyze(&text);

    let writer: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };
    let mut writer = create_writer(config.format.into(), writer, labels);
    writer.write_result(&result)?;

    if let Some(path) = &config.output {
        log::info!("Report written to {}", path.display());
    }

    Ok(())
}

fn load_settings(path: Option<&std::path::Path>) -> Result<CommscoreConfig> {
    match path {
        Some(path) => Ok(config::load_config_from_path(path)?),
        None => Ok(config::load_config()),
    }
}

/// Text from the argument, the file, or stdin, in that order.
pub fn read_input(text: Option<&str>, file: Option<&std::path::Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        return Ok(io::read_file(path)?);
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;
    Ok(buffer)
}

fn build_collaborators(config: &AnalyzeConfig, settings: &CommscoreConfig) -> Result<Collaborators> {
    let oov_rank = settings.lexical.out_of_vocabulary_rank;

    let frequency = match (&config.corpus, &config.word_ranks) {
        (Some(corpus), _) => {
            let text = io::read_file(corpus)?;
            FrequencyTable::from_corpus(&text, oov_rank)
        }
        (None, Some(ranks)) => FrequencyTable::from_ranked_list_file(ranks, oov_rank)?,
        (None, None) => FrequencyTable::builtin(oov_rank),
    };
    log::debug!("Frequency table holds {} words", frequency.len());

    let syllables = match &config.syllables {
        Some(path) => SyllableDictionary::from_path(path)?,
        None => SyllableDictionary::new(),
    };

    let senses = match &config.senses {
        Some(path) => SenseTable::from_path(path)?,
        None => SenseTable::new(),
    };

    Ok(Collaborators::from_lexicon(frequency, syllables, senses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_argument_text_wins() {
        let text = read_input(Some("Hello there."), None).unwrap();
        assert_eq!(text, "Hello there.");
    }

    #[test]
    fn test_reads_text_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("speech.txt");
        fs::write(&path, "I went to the park.").unwrap();

        let text = read_input(None, Some(&path)).unwrap();
        assert_eq!(text, "I went to the park.");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(read_input(None, Some(&dir.path().join("missing.txt"))).is_err());
    }
}
