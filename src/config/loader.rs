use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::CommscoreConfig;
use super::scoring::ScoringWeights;
use crate::core::{Error, Result};

/// Name of the configuration file searched for in the directory hierarchy
pub const CONFIG_FILE_NAME: &str = ".commscore.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string, repairing invalid sections.
///
/// Scoring weights that are individually valid but do not sum to 1.0 are
/// normalized. Any other invalid section is replaced by its defaults.
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<CommscoreConfig, String> {
    let mut config = toml::from_str::<CommscoreConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    repair_weights(&mut config.scoring.weights);
    repair_sections(&mut config);

    Ok(config)
}

fn repair_weights(weights: &mut ScoringWeights) {
    if let Err(e) = weights.validate() {
        let individually_valid = weights
            .collect_weight_validations()
            .iter()
            .all(|validation| validation.is_ok());
        if individually_valid && weights.sum() > 0.0 {
            log::warn!("{}. Normalizing weights.", e);
            weights.normalize();
        } else {
            log::warn!("Invalid scoring weights: {}. Using defaults.", e);
            *weights = ScoringWeights::default();
        }
    }
}

fn repair_sections(config: &mut CommscoreConfig) {
    if let Err(e) = config.lexical.validate() {
        log::warn!("Invalid [lexical] section: {}. Using defaults.", e);
        config.lexical = Default::default();
    }
    if let Err(e) = config.grammar.validate() {
        log::warn!("Invalid [grammar] section: {}. Using defaults.", e);
        config.grammar = Default::default();
    }
    if let Err(e) = config.fluency.validate() {
        log::warn!("Invalid [fluency] section: {}. Using defaults.", e);
        config.fluency = Default::default();
    }
    if let Err(e) = config.coherence.validate() {
        log::warn!("Invalid [coherence] section: {}. Using defaults.", e);
        config.coherence = Default::default();
    }
    if let Err(e) = config.scoring.validate() {
        log::warn!("Invalid [scoring] section: {}. Using defaults.", e);
        config.scoring = Default::default();
    }
    if let Err(e) = config.labels.validate() {
        log::warn!("Invalid [labels] section: {}. Using defaults.", e);
        config.labels = Default::default();
    }
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CommscoreConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search from `start` upward for the nearest config file.
pub fn load_config_from_dir(start: PathBuf) -> CommscoreConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CommscoreConfig::default()
        })
}

pub fn load_config() -> CommscoreConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from_dir(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            CommscoreConfig::default()
        }
    }
}

/// Load an explicitly requested config file. Unlike discovery, failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<CommscoreConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::file_system("Failed to read config file", path, e))?;
    parse_and_validate_config(&contents).map_err(Error::Configuration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GrammarStrategy;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let contents = indoc! {r#"
            [grammar]
            strategy = "blended"

            [lexical]
            complex_word_threshold = 0.7
            max_complex_words = 5

            [lexical.cefr]
            a1 = 500

            [pipeline]
            parallel = false
        "#};
        let config = parse_and_validate_config(contents).unwrap();
        assert_eq!(config.grammar.strategy, GrammarStrategy::Blended);
        assert_eq!(config.lexical.max_complex_words, 5);
        assert_eq!(config.lexical.cefr.a1, 500);
        assert_eq!(config.lexical.cefr.a2, 2000);
        assert!(!config.pipeline.parallel);
    }

    #[test]
    fn test_non_summing_weights_are_normalized() {
        let contents = indoc! {r#"
            [scoring.weights]
            grammar = 0.5
            vocabulary = 0.5
            fluency = 0.5
            coherence = 0.5
        "#};
        let config = parse_and_validate_config(contents).unwrap();
        assert!((config.scoring.weights.grammar - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_section_falls_back_to_default() {
        let contents = indoc! {r#"
            [labels]
            excellent = 0.3
            good = 0.6
        "#};
        let config = parse_and_validate_config(contents).unwrap();
        assert_eq!(config.labels, Default::default());
    }

    #[test]
    fn test_malformed_toml_is_error() {
        assert!(parse_and_validate_config("[grammar\nstrategy =").is_err());
    }

    #[test]
    fn test_load_config_from_ancestor_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[feedback]\nmax_items = 5\n",
        )
        .unwrap();

        let config = load_config_from_dir(nested);
        assert_eq!(config.feedback.max_items, 5);
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        assert!(load_config_from_path(&missing).is_err());
    }

    #[test]
    fn test_directory_ancestors_limit() {
        let ancestors: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            ancestors,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b")
            ]
        );
    }
}
