//! A4 Usos y Actividades.
//!
//! A4.6 reads the A1 night-use answer and A1.1, and A4.4 falls back to
//! the other A4 indicators, so this group is computed last.

use super::{blend, indicator_scores};
use crate::answers::AnswerRecord;
use crate::answers::gates::{Dynamism, NightUse, Respondent};
use crate::score::aggregate::mean_of_present;
use crate::score::analyzer::{AttributeGroup, IndicatorScore};
use crate::score::mapping::{CHANGE_FOUR_POINT, NIGHT_USE, THREE_POINT_DESC};

/// Questions only the responsible team is asked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamEconomy {
    /// `a44_1`: more businesses around the place.
    pub new_businesses: Option<i64>,
    /// `a44_2`: more income for the respondent's business.
    pub higher_income: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsosInputs {
    pub dynamism: Dynamism,
    /// `a42_1`
    pub landmark: Option<i64>,
    /// `a43_1`
    pub daily_usefulness: Option<i64>,
    /// `a43_2`
    pub needs_met: Option<i64>,
    /// `None` when the respondent is a user of the place.
    pub team: Option<TeamEconomy>,
    /// `a45_1`, number of distinct activities.
    pub activity_count: Option<f64>,
    /// `a46_1`
    pub locality: Option<i64>,
    pub night_use: NightUse,
}

impl UsosInputs {
    pub fn from_answers(answers: &AnswerRecord) -> Self {
        let team = match Respondent::from_answers(answers) {
            Respondent::ResponsibleTeam => Some(TeamEconomy {
                new_businesses: answers.code("a44_1"),
                higher_income: answers.code("a44_2"),
            }),
            Respondent::User => None,
        };
        Self {
            dynamism: Dynamism::from_answers(answers),
            landmark: answers.code("a42_1"),
            daily_usefulness: answers.code("a43_1"),
            needs_met: answers.code("a43_2"),
            team,
            activity_count: answers.number("a45_1"),
            locality: answers.code("a46_1"),
            night_use: NightUse::from_answers(answers),
        }
    }
}

/// Percentage growth from `before` to `after`, clamped to [0, 100].
///
/// A missing or non-positive baseline scores 100 if anyone showed up
/// afterwards; a missing `after` scores 0.
pub fn growth_score(before: Option<f64>, after: Option<f64>) -> f64 {
    let before = before.filter(|b| *b > 0.0);
    let Some(before) = before else {
        return match after {
            Some(a) if a > 0.0 => 100.0,
            _ => 0.0,
        };
    };
    let Some(after) = after else {
        return 0.0;
    };
    let growth = (after - before) / before * 100.0;
    growth.clamp(0.0, 100.0)
}

/// A4.1
pub fn dynamism(dynamism: &Dynamism) -> Option<f64> {
    match dynamism {
        Dynamism::Counted { before, after } => Some(growth_score(*before, *after)),
        Dynamism::Perceived(code) => THREE_POINT_DESC.score(*code),
        Dynamism::Unanswered => None,
    }
}

/// A4.2
pub fn landmark(code: Option<i64>) -> Option<f64> {
    THREE_POINT_DESC.score(code)
}

/// A4.3
pub fn usefulness(daily: Option<i64>, needs_met: Option<i64>) -> Option<f64> {
    blend(&[
        (CHANGE_FOUR_POINT.score(daily), 0.6),
        (CHANGE_FOUR_POINT.score(needs_met), 0.4),
    ])
}

/// A4.5: 0-10 activities rescaled to 0-100.
pub fn activity_diversity(count: Option<f64>) -> Option<f64> {
    count.map(|n| 10.0 * n.clamp(0.0, 10.0))
}

/// A4.6. Borrows the A1 night-use answer and A1.1.
pub fn locality(code: Option<i64>, night_use: &NightUse, diversity: Option<f64>) -> Option<f64> {
    blend(&[
        (THREE_POINT_DESC.score(code), 0.34),
        (NIGHT_USE.score(night_use.code()), 0.33),
        (diversity, 0.33),
    ])
}

/// The A4 indicators A4.4 falls back on for non-team respondents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsosPeers {
    pub dynamism: Option<f64>,
    pub landmark: Option<f64>,
    pub usefulness: Option<f64>,
    pub activity_diversity: Option<f64>,
    pub locality: Option<f64>,
}

/// A4.4. Without team answers, the mean of the other present A4 indicators.
pub fn economic_activity(team: Option<&TeamEconomy>, peers: &UsosPeers) -> Option<f64> {
    match team {
        Some(team) => blend(&[
            (THREE_POINT_DESC.score(team.new_businesses), 0.4),
            (THREE_POINT_DESC.score(team.higher_income), 0.6),
        ]),
        None => mean_of_present(&[
            peers.dynamism,
            peers.landmark,
            peers.usefulness,
            peers.activity_diversity,
            peers.locality,
        ]),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsosScores {
    pub dynamism: Option<f64>,
    pub landmark: Option<f64>,
    pub usefulness: Option<f64>,
    pub economic_activity: Option<f64>,
    pub activity_diversity: Option<f64>,
    pub locality: Option<f64>,
}

impl UsosScores {
    /// `diversity` is the already computed A1.1.
    pub fn compute(inputs: &UsosInputs, diversity: Option<f64>) -> Self {
        let peers = UsosPeers {
            dynamism: dynamism(&inputs.dynamism),
            landmark: landmark(inputs.landmark),
            usefulness: usefulness(inputs.daily_usefulness, inputs.needs_met),
            activity_diversity: activity_diversity(inputs.activity_count),
            locality: locality(inputs.locality, &inputs.night_use, diversity),
        };
        Self {
            dynamism: peers.dynamism,
            landmark: peers.landmark,
            usefulness: peers.usefulness,
            economic_activity: economic_activity(inputs.team.as_ref(), &peers),
            activity_diversity: peers.activity_diversity,
            locality: peers.locality,
        }
    }

    pub fn scores(&self) -> Vec<IndicatorScore> {
        indicator_scores(
            AttributeGroup::Usos,
            &[
                self.dynamism,
                self.landmark,
                self.usefulness,
                self.economic_activity,
                self.activity_diversity,
                self.locality,
            ],
        )
    }
}

#[cfg(test)]
#[path = "usos_test.rs"]
mod tests;
