//! Fixed lookup tables turning an ordinal survey code into a 0-100 score.
//!
//! Codes are 1-based. Any code outside a table (and a missing code) maps
//! to `None`.

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeTable {
    name: &'static str,
    scores: &'static [f64],
}

impl CodeTable {
    pub const fn new(name: &'static str, scores: &'static [f64]) -> Self {
        Self { name, scores }
    }

    pub fn score(&self, code: Option<i64>) -> Option<f64> {
        let code = code?;
        let score = code
            .checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| self.scores.get(i))
            .copied();
        if score.is_none() {
            trace!(table = self.name, code, "code outside table domain");
        }
        score
    }
}

pub const THREE_POINT_DESC: CodeTable = CodeTable::new("three_point_desc", &[100.0, 50.0, 10.0]);

pub const THREE_POINT_ASC: CodeTable = CodeTable::new("three_point_asc", &[10.0, 50.0, 100.0]);

/// Physical condition: good, fair, poor, bad.
pub const FOUR_POINT_DESC: CodeTable =
    CodeTable::new("four_point_desc", &[100.0, 75.0, 50.0, 25.0]);

pub const FOUR_POINT_STEEP: CodeTable =
    CodeTable::new("four_point_steep", &[100.0, 60.0, 20.0, 10.0]);

pub const NIGHT_USE: CodeTable = CodeTable::new("night_use", &[100.0, 10.0, 5.0]);

pub const NETWORKS_CREATED: CodeTable = CodeTable::new("networks_created", &[100.0, 1.0, 5.0]);

/// Dominant arrival mode: car, public transit, bicycle, walking.
pub const PRIMARY_MODE: CodeTable =
    CodeTable::new("primary_mode", &[50.0, 60.0, 90.0, 100.0]);

pub const SUSTAINABLE_SHIFT: CodeTable = CodeTable::new("sustainable_shift", &[100.0, 50.0]);

pub const CHANGE_FOUR_POINT: CodeTable =
    CodeTable::new("change_four_point", &[100.0, 75.0, 50.0, 1.0]);

#[cfg(test)]
#[path = "mapping_test.rs"]
mod tests;
