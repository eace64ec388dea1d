//! CEFR bucketing by frequency rank.

use crate::config::CefrThresholds;
use crate::core::CefrLevel;

/// First level whose upper bound is >= `rank`; C2 when rarer than every bound.
///
/// Monotone in `rank` as long as the thresholds ascend, which config
/// validation guarantees.
pub fn cefr_level(rank: u32, thresholds: &CefrThresholds) -> CefrLevel {
    thresholds
        .ascending()
        .iter()
        .find(|(_, bound)| rank <= *bound)
        .map(|(level, _)| *level)
        .unwrap_or(CefrLevel::C2)
}
