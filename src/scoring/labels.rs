//! Qualitative score labels.

use crate::config::LabelThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityLabel {
    Excellent,
    Good,
    NeedsImprovement,
}

impl QualityLabel {
    /// Both thresholds are exclusive: exactly 0.8 is Good, exactly 0.6 needs work.
    pub fn from_score(score: f64, thresholds: &LabelThresholds) -> Self {
        if score > thresholds.excellent {
            QualityLabel::Excellent
        } else if score > thresholds.good {
            QualityLabel::Good
        } else {
            QualityLabel::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualityLabel::Excellent => "Excellent",
            QualityLabel::Good => "Good",
            QualityLabel::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_boundaries_are_exclusive() {
        let thresholds = LabelThresholds::default();
        assert_eq!(QualityLabel::from_score(0.81, &thresholds), QualityLabel::Excellent);
        assert_eq!(QualityLabel::from_score(0.80, &thresholds), QualityLabel::Good);
        assert_eq!(QualityLabel::from_score(0.61, &thresholds), QualityLabel::Good);
        assert_eq!(
            QualityLabel::from_score(0.60, &thresholds),
            QualityLabel::NeedsImprovement
        );
        assert_eq!(
            QualityLabel::from_score(0.0, &thresholds).to_string(),
            "Needs Improvement"
        );
    }
}
