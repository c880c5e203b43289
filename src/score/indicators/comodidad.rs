//! A3 Comodidad e Imagen.

use super::{blend, indicator_scores};
use crate::answers::AnswerRecord;
use crate::answers::gates::{Respondent, place_condition};
use crate::score::analyzer::{AttributeGroup, IndicatorScore};
use crate::score::mapping::{FOUR_POINT_DESC, THREE_POINT_DESC};

/// Questions only the responsible team is asked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamComfort {
    /// `a32_1`; the form copies the team's `a32_2` answer here.
    pub upkeep: Option<i64>,
    /// `a32_2`
    pub upkeep_since_opening: Option<i64>,
    /// `a36_1`, percent of sustainable materials.
    pub sustainable_materials: Option<f64>,
    /// `a36_2`, percent of climate-resilient furniture.
    pub resilient_furniture: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComodidadInputs {
    /// `a31_1`, percent.
    pub perceived_safety: Option<f64>,
    pub place_condition: Option<i64>,
    /// `None` when the respondent is a user of the place.
    pub team: Option<TeamComfort>,
    /// `a33_1`
    pub comfort: Option<i64>,
    /// `a33_2`
    pub shade: Option<i64>,
    /// `a34_1`
    pub walkability: Option<i64>,
    /// `a35_1`
    pub seating: Option<i64>,
    /// `a37_1`
    pub pleasantness: Option<i64>,
}

impl ComodidadInputs {
    pub fn from_answers(answers: &AnswerRecord) -> Self {
        let team = match Respondent::from_answers(answers) {
            Respondent::ResponsibleTeam => Some(TeamComfort {
                upkeep: answers.code("a32_1"),
                upkeep_since_opening: answers.code("a32_2"),
                sustainable_materials: answers.measurement("a36_1", 0.0..=100.0),
                resilient_furniture: answers.measurement("a36_2", 0.0..=100.0),
            }),
            Respondent::User => None,
        };
        Self {
            perceived_safety: answers.bounded("a31_1", 0.0..=100.0),
            place_condition: place_condition(answers),
            team,
            comfort: answers.code("a33_1"),
            shade: answers.code("a33_2"),
            walkability: answers.code("a34_1"),
            seating: answers.code("a35_1"),
            pleasantness: answers.code("a37_1"),
        }
    }
}

/// A3.1
pub fn safety(perceived: Option<f64>, place_condition: Option<i64>) -> Option<f64> {
    blend(&[
        (perceived, 0.6),
        (FOUR_POINT_DESC.score(place_condition), 0.4),
    ])
}

/// A3.2. Users are not asked; the place's physical condition stands in.
pub fn image_upkeep(team: Option<&TeamComfort>, place_condition: Option<i64>) -> Option<f64> {
    let Some(team) = team else {
        return FOUR_POINT_DESC.score(place_condition);
    };
    let upkeep = team.upkeep.or(team.upkeep_since_opening);
    blend(&[
        (THREE_POINT_DESC.score(upkeep), 0.55),
        (THREE_POINT_DESC.score(team.upkeep_since_opening), 0.45),
    ])
}

/// A3.3
pub fn comfort(comfort: Option<i64>, shade: Option<i64>) -> Option<f64> {
    blend(&[
        (THREE_POINT_DESC.score(comfort), 0.65),
        (THREE_POINT_DESC.score(shade), 0.35),
    ])
}

/// A3.4
pub fn walkability(code: Option<i64>) -> Option<f64> {
    THREE_POINT_DESC.score(code)
}

/// A3.5
pub fn seating(code: Option<i64>) -> Option<f64> {
    THREE_POINT_DESC.score(code)
}

/// A3.6. Only the responsible team knows the materials.
pub fn climate_resilience(team: Option<&TeamComfort>) -> Option<f64> {
    let team = team?;
    blend(&[
        (team.sustainable_materials, 0.6),
        (team.resilient_furniture, 0.4),
    ])
}

/// A3.7
pub fn pleasantness(code: Option<i64>) -> Option<f64> {
    THREE_POINT_DESC.score(code)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComodidadScores {
    pub safety: Option<f64>,
    pub image_upkeep: Option<f64>,
    pub comfort: Option<f64>,
    pub walkability: Option<f64>,
    pub seating: Option<f64>,
    pub climate_resilience: Option<f64>,
    pub pleasantness: Option<f64>,
}

impl ComodidadScores {
    pub fn compute(inputs: &ComodidadInputs) -> Self {
        let team = inputs.team.as_ref();
        Self {
            safety: safety(inputs.perceived_safety, inputs.place_condition),
            image_upkeep: image_upkeep(team, inputs.place_condition),
            comfort: comfort(inputs.comfort, inputs.shade),
            walkability: walkability(inputs.walkability),
            seating: seating(inputs.seating),
            climate_resilience: climate_resilience(team),
            pleasantness: pleasantness(inputs.pleasantness),
        }
    }

    pub fn scores(&self) -> Vec<IndicatorScore> {
        indicator_scores(
            AttributeGroup::Comodidad,
            &[
                self.safety,
                self.image_upkeep,
                self.comfort,
                self.walkability,
                self.seating,
                self.climate_resilience,
                self.pleasantness,
            ],
        )
    }
}

#[cfg(test)]
#[path = "comodidad_test.rs"]
mod tests;
