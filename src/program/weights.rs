//! Program weighting model: per-indicator weights, normalized section
//! weights, attribute totals and the global score.

use std::collections::BTreeMap;

use tracing::debug;

use super::ProgramConfig;
use crate::score::aggregate::weighted_average_skipping_absent;
use crate::score::analyzer::{AttributeGroup, IndicatorId, IndicatorScore};

pub const DEFAULT_INDICATOR_WEIGHT: f64 = 1.0;

/// Weight of each given indicator under `config`.
pub fn indicator_weights(
    config: &ProgramConfig,
    group: AttributeGroup,
    ids: &[IndicatorId],
) -> BTreeMap<IndicatorId, f64> {
    let Some(overrides) = config.indicator_weights.get(&group) else {
        return ids.iter().map(|id| (*id, DEFAULT_INDICATOR_WEIGHT)).collect();
    };
    ids.iter()
        .map(|id| {
            let weight = overrides.get(id).copied().unwrap_or(DEFAULT_INDICATOR_WEIGHT);
            (*id, weight)
        })
        .collect()
}

/// Section weights scaled to sum to 1. Weights summing to 0 are returned
/// as configured.
pub fn section_weights(config: &ProgramConfig) -> BTreeMap<AttributeGroup, f64> {
    let total: f64 = config.section_weights.values().sum();
    if total == 0.0 {
        return config.section_weights.clone();
    }
    config
        .section_weights
        .iter()
        .map(|(group, weight)| (*group, weight / total))
        .collect()
}

/// Weighted average of a group's present indicators; 0.0 when none is
/// present.
pub fn attribute_total(
    config: &ProgramConfig,
    group: AttributeGroup,
    indicators: &[IndicatorScore],
) -> f64 {
    let ids: Vec<IndicatorId> = indicators.iter().map(|i| i.id).collect();
    let weights = indicator_weights(config, group, &ids);
    let total = weighted_average_skipping_absent(indicators.iter().map(|i| {
        let weight = weights.get(&i.id).copied().unwrap_or(DEFAULT_INDICATOR_WEIGHT);
        (i.score, weight)
    }));
    debug!(attribute = group.id(), total, "attribute total");
    total
}

/// Weighted average of the present section scores. A section without a
/// configured weight counts with weight 0.
pub fn global_score(config: &ProgramConfig, sections: &BTreeMap<AttributeGroup, Option<f64>>) -> f64 {
    let weights = section_weights(config);
    weighted_average_skipping_absent(
        sections
            .iter()
            .map(|(group, score)| (*score, weights.get(group).copied().unwrap_or(0.0))),
    )
}

#[cfg(test)]
#[path = "weights_test.rs"]
mod tests;
