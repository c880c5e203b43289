//! The two absence policies used when combining scores.
//!
//! Indicators and attribute totals skip absent values in both numerator and
//! denominator. Intangibles count an absent value as 0 against a fixed
//! denominator. The two helpers stay separate so every call site names the
//! policy it applies.

/// Weighted average over present values only. Returns 0.0 when nothing is
/// present or the present weights sum to 0.
pub fn weighted_average_skipping_absent(
    terms: impl IntoIterator<Item = (Option<f64>, f64)>,
) -> f64 {
    let (numerator, denominator) = terms
        .into_iter()
        .filter_map(|(value, weight)| value.map(|v| (v, weight)))
        .fold((0.0, 0.0), |(num, den), (v, w)| (num + v * w, den + w));
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Linear combination where an absent value contributes 0.
pub fn weighted_sum_zero_filling_absent(terms: &[(Option<f64>, f64)]) -> f64 {
    terms
        .iter()
        .map(|(value, weight)| value.unwrap_or(0.0) * weight)
        .sum()
}

/// Unweighted mean of the present values; `None` when none is present.
pub fn mean_of_present(values: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return None;
    }
    Some(present.iter().sum::<f64>() / present.len() as f64)
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
