//! A1 Encuentro: who meets at the place and how the community looks after it.

use super::{blend, indicator_scores};
use crate::answers::AnswerRecord;
use crate::answers::gates::{NightUse, OrganizedGroups, place_condition};
use crate::score::analyzer::{AttributeGroup, IndicatorScore};
use crate::score::mapping::{
    FOUR_POINT_DESC, FOUR_POINT_STEEP, NETWORKS_CREATED, NIGHT_USE, THREE_POINT_ASC,
    THREE_POINT_DESC,
};

/// Discount applied when volunteering is inferred from the physical
/// condition because no organized group reports on it.
const NO_GROUPS_PENALTY: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct EncuentroInputs {
    /// `a11_1`, percent.
    pub diversity_observed: Option<f64>,
    /// `a11_2`, 0-10 rating used on its raw scale.
    pub diversity_reported: Option<f64>,
    pub groups: OrganizedGroups,
    /// `a12_3`
    pub networks_created: Option<i64>,
    pub place_condition: Option<i64>,
    pub night_use: NightUse,
}

impl EncuentroInputs {
    pub fn from_answers(answers: &AnswerRecord) -> Self {
        Self {
            diversity_observed: answers.measurement("a11_1", 0.0..=100.0),
            diversity_reported: answers.measurement("a11_2", 0.0..=10.0),
            groups: OrganizedGroups::from_answers(answers),
            networks_created: answers.code("a12_3"),
            place_condition: place_condition(answers),
            night_use: NightUse::from_answers(answers),
        }
    }
}

/// A1.1. The blend leans on the observed value, harder when it is the
/// larger of the two.
pub fn diversity(observed: Option<f64>, reported: Option<f64>) -> Option<f64> {
    let a = observed?;
    let Some(b) = reported else {
        return Some(a);
    };
    if a >= b {
        Some(0.85 * a + 0.15 * b)
    } else {
        Some(0.60 * a + 0.40 * b)
    }
}

/// A1.2
pub fn citizen_networks(groups: &OrganizedGroups, networks_created: Option<i64>) -> Option<f64> {
    let presence = THREE_POINT_ASC.score(groups.code());
    let upkeep = match groups {
        OrganizedGroups::Present { care, .. } => THREE_POINT_DESC.score(*care),
        OrganizedGroups::Absent { physical_condition } => FOUR_POINT_DESC.score(*physical_condition),
        OrganizedGroups::Unanswered => None,
    };
    blend(&[
        (presence, 0.75),
        (upkeep, 0.10),
        (NETWORKS_CREATED.score(networks_created), 0.15),
    ])
}

/// A1.3
pub fn volunteering(groups: &OrganizedGroups) -> Option<f64> {
    match groups {
        OrganizedGroups::Present {
            physical_condition, ..
        } => FOUR_POINT_DESC.score(*physical_condition),
        OrganizedGroups::Absent { physical_condition } => {
            FOUR_POINT_DESC.score(*physical_condition).map(|s| s * NO_GROUPS_PENALTY)
        }
        OrganizedGroups::Unanswered => None,
    }
}

/// A1.4
pub fn place_upkeep(volunteering: Option<f64>, place_condition: Option<i64>) -> Option<f64> {
    blend(&[
        (volunteering, 0.5),
        (FOUR_POINT_DESC.score(place_condition), 0.5),
    ])
}

/// A1.5
pub fn night_use(night: &NightUse, networks_created: Option<i64>) -> Option<f64> {
    match night {
        NightUse::Regular => NIGHT_USE.score(night.code()),
        NightUse::NotRegular { perceived, .. } => {
            let perceived = FOUR_POINT_STEEP.score(*perceived)?;
            let networks = NETWORKS_CREATED.score(networks_created)?;
            Some((0.5 * perceived + networks).clamp(0.0, 100.0))
        }
        NightUse::Unanswered => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncuentroScores {
    pub diversity: Option<f64>,
    pub citizen_networks: Option<f64>,
    pub volunteering: Option<f64>,
    pub place_upkeep: Option<f64>,
    pub night_use: Option<f64>,
}

impl EncuentroScores {
    pub fn compute(inputs: &EncuentroInputs) -> Self {
        let volunteering = volunteering(&inputs.groups);
        Self {
            diversity: diversity(inputs.diversity_observed, inputs.diversity_reported),
            citizen_networks: citizen_networks(&inputs.groups, inputs.networks_created),
            volunteering,
            place_upkeep: place_upkeep(volunteering, inputs.place_condition),
            night_use: night_use(&inputs.night_use, inputs.networks_created),
        }
    }

    pub fn scores(&self) -> Vec<IndicatorScore> {
        indicator_scores(
            AttributeGroup::Encuentro,
            &[
                self.diversity,
                self.citizen_networks,
                self.volunteering,
                self.place_upkeep,
                self.night_use,
            ],
        )
    }
}

#[cfg(test)]
#[path = "encuentro_test.rs"]
mod tests;
