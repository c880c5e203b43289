//! Indicator calculators, one module per attribute group.
//!
//! Every calculator is a pure function of its declared inputs returning a
//! 0-100 score or `None`. Each group also has an input struct read from the
//! answer record and a scores struct holding the computed indicators in
//! id order.

pub mod comodidad;
pub mod conexiones;
pub mod encuentro;
pub mod usos;

use super::analyzer::{AttributeGroup, IndicatorScore};

/// Linear blend needing every term: one absent term makes the whole blend
/// absent.
pub(crate) fn blend(terms: &[(Option<f64>, f64)]) -> Option<f64> {
    terms
        .iter()
        .try_fold(0.0, |acc, (value, weight)| value.map(|v| acc + v * weight))
}

/// Pair each value with its indicator id, in id order.
pub(crate) fn indicator_scores(group: AttributeGroup, values: &[Option<f64>]) -> Vec<IndicatorScore> {
    group
        .indicators()
        .zip(values.iter().copied())
        .map(|(id, score)| IndicatorScore { id, score })
        .collect()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
