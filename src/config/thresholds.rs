use crate::core::CefrLevel;
use serde::{Deserialize, Serialize};

/// Frequency-rank upper bounds for each CEFR bucket.
///
/// A word's bucket is the first level whose bound is >= its rank; anything
/// rarer than `c1` is C2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CefrThresholds {
    #[serde(default = "default_a1")]
    pub a1: u32,

    #[serde(default = "default_a2")]
    pub a2: u32,

    #[serde(default = "default_b1")]
    pub b1: u32,

    #[serde(default = "default_b2")]
    pub b2: u32,

    #[serde(default = "default_c1")]
    pub c1: u32,
}

impl Default for CefrThresholds {
    fn default() -> Self {
        Self {
            a1: default_a1(),
            a2: default_a2(),
            b1: default_b1(),
            b2: default_b2(),
            c1: default_c1(),
        }
    }
}

impl CefrThresholds {
    /// Bounded levels in ascending order; C2 is the open-ended remainder.
    pub fn ascending(&self) -> [(CefrLevel, u32); 5] {
        [
            (CefrLevel::A1, self.a1),
            (CefrLevel::A2, self.a2),
            (CefrLevel::B1, self.b1),
            (CefrLevel::B2, self.b2),
            (CefrLevel::C1, self.c1),
        ]
    }

    pub fn validate(&self) -> Result<(), String> {
        let bounds = self.ascending();
        for pair in bounds.windows(2) {
            let (lower_level, lower) = pair[0];
            let (upper_level, upper) = pair[1];
            if lower >= upper {
                return Err(format!(
                    "CEFR threshold {} ({}) must be below {} ({})",
                    lower_level, lower, upper_level, upper
                ));
            }
        }
        Ok(())
    }
}

/// Score boundaries for qualitative labels. Both bounds are exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelThresholds {
    #[serde(default = "default_excellent")]
    pub excellent: f64,

    #[serde(default = "default_good")]
    pub good: f64,
}

impl Default for LabelThresholds {
    fn default() -> Self {
        Self {
            excellent: default_excellent(),
            good: default_good(),
        }
    }
}

impl LabelThresholds {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.good) || !(0.0..=1.0).contains(&self.excellent) {
            return Err("Label thresholds must be between 0.0 and 1.0".to_string());
        }
        if self.good >= self.excellent {
            return Err(format!(
                "Label threshold 'good' ({}) must be below 'excellent' ({})",
                self.good, self.excellent
            ));
        }
        Ok(())
    }
}

/// Scales that map raw word features onto [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityNormalizers {
    /// Characters at which the length factor saturates
    #[serde(default = "default_length_scale")]
    pub length: f64,

    #[serde(default = "default_syllable_scale")]
    pub syllables: f64,

    #[serde(default = "default_frequency_scale")]
    pub frequency_rank: f64,

    #[serde(default = "default_sense_scale")]
    pub senses: f64,
}

impl Default for ComplexityNormalizers {
    fn default() -> Self {
        Self {
            length: default_length_scale(),
            syllables: default_syllable_scale(),
            frequency_rank: default_frequency_scale(),
            senses: default_sense_scale(),
        }
    }
}

impl ComplexityNormalizers {
    pub fn validate(&self) -> Result<(), String> {
        let scales = [
            ("length", self.length),
            ("syllables", self.syllables),
            ("frequency_rank", self.frequency_rank),
            ("senses", self.senses),
        ];
        match scales.iter().find(|(_, scale)| !(*scale > 0.0)) {
            Some((name, scale)) => Err(format!(
                "Complexity normalizer '{}' must be positive, got {}",
                name, scale
            )),
            None => Ok(()),
        }
    }
}

fn default_a1() -> u32 {
    1000
}
fn default_a2() -> u32 {
    2000
}
fn default_b1() -> u32 {
    3500
}
fn default_b2() -> u32 {
    5000
}
fn default_c1() -> u32 {
    7000
}
fn default_excellent() -> f64 {
    0.8
}
fn default_good() -> f64 {
    0.6
}
fn default_length_scale() -> f64 {
    12.0
}
fn default_syllable_scale() -> f64 {
    5.0
}
fn default_frequency_scale() -> f64 {
    10000.0
}
fn default_sense_scale() -> f64 {
    10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cefr_thresholds_ascend() {
        assert!(CefrThresholds::default().validate().is_ok());
    }

    #[test]
    fn test_cefr_thresholds_rejects_unordered() {
        let thresholds = CefrThresholds {
            b1: 1500,
            a2: 2000,
            ..CefrThresholds::default()
        };
        let err = thresholds.validate().unwrap_err();
        assert!(err.contains("A2 (2000) must be below B1 (1500)"));
    }

    #[test]
    fn test_label_thresholds_order() {
        assert!(LabelThresholds::default().validate().is_ok());
        let inverted = LabelThresholds {
            excellent: 0.5,
            good: 0.7,
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_normalizers_must_be_positive() {
        let normalizers = ComplexityNormalizers {
            senses: 0.0,
            ..ComplexityNormalizers::default()
        };
        assert!(normalizers.validate().unwrap_err().contains("senses"));
    }
}
