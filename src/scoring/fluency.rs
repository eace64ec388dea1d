//! Fluency scoring from readability and language-model perplexity.

use super::normalize::{clamp_score, round3};
use crate::config::FluencyConfig;
use crate::core::{CollaboratorError, Degradation, ModuleOutcome, ScoringModule};
use crate::io::{PerplexityScorer, ReadabilityScorer};
use tracing::{debug, info_span, warn};

const READABILITY: &str = "readability scorer";
const PERPLEXITY: &str = "perplexity scorer";

/// Map reading ease (0-100, higher = easier) to [0, 1], higher = harder.
pub fn readability_term(ease: f64) -> f64 {
    (1.0 - ease / 100.0).clamp(0.0, 1.0)
}

/// Map perplexity to (0, 1]; `scale` is the perplexity scoring 0.5.
pub fn perplexity_term(perplexity: f64, scale: f64) -> f64 {
    1.0 / (1.0 + perplexity / scale)
}

/// Mean of the readability and perplexity terms, floored and rounded to
/// three decimals. Each term falls back independently.
pub fn compute_fluency_score(
    text: &str,
    readability: &dyn ReadabilityScorer,
    perplexity: &dyn PerplexityScorer,
    config: &FluencyConfig,
    floor: f64,
) -> ModuleOutcome<f64> {
    let _span = info_span!("fluency_score").entered();

    if text.trim().is_empty() {
        let score = (config.readability_fallback + config.perplexity_fallback) / 2.0;
        return ModuleOutcome::clean(round3(clamp_score(score, floor)));
    }

    let mut degradations = Vec::new();

    let readability_score = match readability.reading_ease(text).and_then(finite) {
        Ok(ease) => readability_term(ease),
        Err(err) => {
            warn!(collaborator = READABILITY, error = %err, "Readability failed, using fallback");
            degradations.push(Degradation::new(ScoringModule::Fluency, READABILITY, err));
            config.readability_fallback
        }
    };

    let perplexity_score = match perplexity
        .perplexity(text)
        .and_then(finite)
        .and_then(non_negative)
    {
        Ok(ppl) => perplexity_term(ppl, config.perplexity_scale),
        Err(err) => {
            warn!(collaborator = PERPLEXITY, error = %err, "Perplexity failed, using fallback");
            degradations.push(Degradation::new(ScoringModule::Fluency, PERPLEXITY, err));
            config.perplexity_fallback
        }
    };

    let score = round3(clamp_score((readability_score + perplexity_score) / 2.0, floor));
    debug!(readability_score, perplexity_score, score, "Fluency score computed");

    ModuleOutcome::with_degradations(score, degradations)
}

fn finite(value: f64) -> Result<f64, CollaboratorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CollaboratorError::invalid(format!("non-finite value {value}")))
    }
}

fn non_negative(value: f64) -> Result<f64, CollaboratorError> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(CollaboratorError::invalid(format!("negative perplexity {value}")))
    }
}
