//! A2 Conexiones y Accesos.

use super::{blend, indicator_scores};
use crate::answers::AnswerRecord;
use crate::answers::gates::{Caregiver, ModalShares, ModalSplit};
use crate::score::analyzer::{AttributeGroup, IndicatorScore};
use crate::score::mapping::{
    FOUR_POINT_DESC, PRIMARY_MODE, SUSTAINABLE_SHIFT, THREE_POINT_ASC, THREE_POINT_DESC,
};

/// Share above which one mode family decides the score outright.
const MAJORITY: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ConexionesInputs {
    pub modal_split: ModalSplit,
    /// `a22_1`: easy to reach.
    pub ease_of_access: Option<i64>,
    /// `a22_2`: usually arrives by car.
    pub car_arrival: Option<i64>,
    /// `a22_3`: shifted to sustainable modes.
    pub sustainable_shift: Option<i64>,
    /// `a23_1`
    pub permanence: Option<i64>,
    /// `a24_1`, percent.
    pub surroundings_observed: Option<f64>,
    /// `a24_2`, 0-10 rating.
    pub surroundings_rating: Option<f64>,
    /// `a25_1`
    pub reduced_mobility: Option<i64>,
    /// `a25_2`, 0-10 connection rating.
    pub connection_rating: Option<f64>,
    /// `a25_3`
    pub reduced_mobility_facilities: Option<i64>,
    /// `a26_1_p`
    pub early_childhood: Option<i64>,
    pub caregiver: Caregiver,
}

impl ConexionesInputs {
    pub fn from_answers(answers: &AnswerRecord) -> Self {
        Self {
            modal_split: ModalSplit::from_answers(answers),
            ease_of_access: answers.code("a22_1"),
            car_arrival: answers.code("a22_2"),
            sustainable_shift: answers.code("a22_3"),
            permanence: answers.code("a23_1"),
            surroundings_observed: answers.measurement("a24_1", 0.0..=100.0),
            surroundings_rating: answers.measurement("a24_2", 0.0..=10.0),
            reduced_mobility: answers.code("a25_1"),
            connection_rating: answers.measurement("a25_2", 0.0..=10.0),
            reduced_mobility_facilities: answers.code("a25_3"),
            early_childhood: answers.code("a26_1_p"),
            caregiver: Caregiver::from_answers(answers),
        }
    }
}

/// A2.1 from modal shares. A majority of active modes, then of transit,
/// then of car decides the score; otherwise the shares are blended.
pub fn transport_shares(shares: &ModalShares) -> Option<f64> {
    let active = shares.active();
    if active > MAJORITY {
        return Some(100.0);
    }
    if shares.transit > MAJORITY {
        return Some(80.0);
    }
    if shares.car > MAJORITY {
        return Some(50.0);
    }
    let total = active + shares.transit + shares.car;
    if total <= 0.0 {
        return None;
    }
    Some((1.0 * active + 0.8 * shares.transit + 0.5 * shares.car) / total.max(1.0) * 100.0)
}

/// A2.1
pub fn transport_modes(split: &ModalSplit) -> Option<f64> {
    match split {
        ModalSplit::Percentages(shares) => transport_shares(shares),
        ModalSplit::PrimaryMode(mode) => PRIMARY_MODE.score(*mode),
    }
}

/// A2.2
pub fn connectivity(
    ease_of_access: Option<i64>,
    car_arrival: Option<i64>,
    sustainable_shift: Option<i64>,
) -> Option<f64> {
    blend(&[
        (THREE_POINT_DESC.score(ease_of_access), 0.5),
        (THREE_POINT_ASC.score(car_arrival), 0.2),
        (SUSTAINABLE_SHIFT.score(sustainable_shift), 0.3),
    ])
}

/// A2.3
pub fn permanence(code: Option<i64>) -> Option<f64> {
    FOUR_POINT_DESC.score(code)
}

/// A2.4. `rating` is on 0-10 and rescaled here.
pub fn surroundings_accessibility(observed: Option<f64>, rating: Option<f64>) -> Option<f64> {
    let rating = rating.map(|r| r * 10.0);
    match (observed, rating) {
        (Some(a), Some(b)) => Some(0.5 * a + 0.5 * b),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    }
}

/// A2.5. Without a connection rating the two coded answers carry the score.
pub fn reduced_mobility_accessibility(
    access: Option<i64>,
    connection_rating: Option<f64>,
    facilities: Option<i64>,
) -> Option<f64> {
    let access = THREE_POINT_DESC.score(access)?;
    let facilities = THREE_POINT_DESC.score(facilities)?;
    match connection_rating {
        Some(rating) => Some(0.5 * access + 0.3 * rating * 10.0 + 0.2 * facilities),
        None => Some(0.75 * access + 0.25 * facilities),
    }
}

/// A2.6
pub fn early_childhood_accessibility(access: Option<i64>, caregiver: &Caregiver) -> Option<f64> {
    let access = THREE_POINT_DESC.score(access)?;
    let satisfaction = match caregiver {
        Caregiver::Yes { satisfaction } => THREE_POINT_DESC.score(*satisfaction),
        Caregiver::No => None,
    };
    Some(match satisfaction {
        Some(s) => 0.65 * access + 0.35 * s,
        None => access,
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConexionesScores {
    pub transport_modes: Option<f64>,
    pub connectivity: Option<f64>,
    pub permanence: Option<f64>,
    pub surroundings_accessibility: Option<f64>,
    pub reduced_mobility_accessibility: Option<f64>,
    pub early_childhood_accessibility: Option<f64>,
}

impl ConexionesScores {
    pub fn compute(inputs: &ConexionesInputs) -> Self {
        Self {
            transport_modes: transport_modes(&inputs.modal_split),
            connectivity: connectivity(
                inputs.ease_of_access,
                inputs.car_arrival,
                inputs.sustainable_shift,
            ),
            permanence: permanence(inputs.permanence),
            surroundings_accessibility: surroundings_accessibility(
                inputs.surroundings_observed,
                inputs.surroundings_rating,
            ),
            reduced_mobility_accessibility: reduced_mobility_accessibility(
                inputs.reduced_mobility,
                inputs.connection_rating,
                inputs.reduced_mobility_facilities,
            ),
            early_childhood_accessibility: early_childhood_accessibility(
                inputs.early_childhood,
                &inputs.caregiver,
            ),
        }
    }

    pub fn scores(&self) -> Vec<IndicatorScore> {
        indicator_scores(
            AttributeGroup::Conexiones,
            &[
                self.transport_modes,
                self.connectivity,
                self.permanence,
                self.surroundings_accessibility,
                self.reduced_mobility_accessibility,
                self.early_childhood_accessibility,
            ],
        )
    }
}

#[cfg(test)]
#[path = "conexiones_test.rs"]
mod tests;
