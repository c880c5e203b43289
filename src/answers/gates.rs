//! Gated question groups.
//!
//! Several questions decide which follow-up questions the form asks. Each
//! such group is read into a tagged union so a calculator can only see the
//! follow-up answers that belong to the branch actually taken; answers
//! left over from the other branch are never consulted.

use super::AnswerRecord;

const PERCENT: std::ops::RangeInclusive<f64> = 0.0..=100.0;

/// `a12_1`: do organized groups use the place?
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrganizedGroups {
    /// No groups (code 1). Only the physical condition (`a12_2_2`) is asked.
    Absent { physical_condition: Option<i64> },
    /// At least one group (code 2) or three or more (code 3). Asks whether
    /// the groups look after the place (`a12_2_1`) and its condition (`a13_1`).
    Present {
        groups: i64,
        care: Option<i64>,
        physical_condition: Option<i64>,
    },
    Unanswered,
}

impl OrganizedGroups {
    pub fn from_answers(answers: &AnswerRecord) -> Self {
        match answers.code("a12_1") {
            Some(1) => Self::Absent {
                physical_condition: answers.code("a12_2_2"),
            },
            Some(groups @ (2 | 3)) => Self::Present {
                groups,
                care: answers.code("a12_2_1"),
                physical_condition: answers.code("a13_1"),
            },
            _ => Self::Unanswered,
        }
    }

    /// The `a12_1` code this branch stands for.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Absent { .. } => Some(1),
            Self::Present { groups, .. } => Some(*groups),
            Self::Unanswered => None,
        }
    }

    pub fn physical_condition(&self) -> Option<i64> {
        match self {
            Self::Absent { physical_condition } | Self::Present { physical_condition, .. } => {
                *physical_condition
            }
            Self::Unanswered => None,
        }
    }
}

/// Physical condition of the place (`a14_1`, 1 best .. 4 worst).
///
/// The form stores it explicitly; records from other sources may omit it,
/// in which case the organized-groups branch supplies it.
pub fn place_condition(answers: &AnswerRecord) -> Option<i64> {
    answers
        .code("a14_1")
        .or_else(|| OrganizedGroups::from_answers(answers).physical_condition())
}

/// `a15_1`: do the groups use the place after 18:00?
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NightUse {
    Regular,
    /// "No" (2) or "don't know" (3); the form then asks how busy the place
    /// is after dark (`a15_2`).
    NotRegular { code: i64, perceived: Option<i64> },
    Unanswered,
}

impl NightUse {
    pub fn from_answers(answers: &AnswerRecord) -> Self {
        match answers.code("a15_1") {
            Some(1) => Self::Regular,
            Some(code @ (2 | 3)) => Self::NotRegular {
                code,
                perceived: answers.code("a15_2"),
            },
            _ => Self::Unanswered,
        }
    }

    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Regular => Some(1),
            Self::NotRegular { code, .. } => Some(*code),
            Self::Unanswered => None,
        }
    }
}

/// Modal shares in percent. They need not sum to 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalShares {
    pub walk: f64,
    pub bike: f64,
    pub transit: f64,
    pub car: f64,
}

impl ModalShares {
    pub fn active(&self) -> f64 {
        self.walk + self.bike
    }
}

/// `a21_use_percent`: are the arrival percentages per mode known?
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModalSplit {
    Percentages(ModalShares),
    /// Only the dominant arrival mode (`a21_2`) is known.
    PrimaryMode(Option<i64>),
}

const SHARE_KEYS: [&str; 4] = ["a21_1_walk", "a21_1_bike", "a21_1_pt", "a21_1_car"];

impl ModalSplit {
    pub fn from_answers(answers: &AnswerRecord) -> Self {
        let has_shares = SHARE_KEYS
            .iter()
            .any(|key| answers.bounded(key, PERCENT).is_some_and(|v| v > 0.0));
        let use_percent = match answers.code("a21_use_percent") {
            Some(1) => true,
            Some(2) => false,
            _ => has_shares,
        };
        if !use_percent {
            return Self::PrimaryMode(answers.code("a21_2"));
        }
        // Unanswered sliders count as 0 within this branch.
        let share = |key: &str| answers.bounded(key, PERCENT).unwrap_or(0.0);
        Self::Percentages(ModalShares {
            walk: share(SHARE_KEYS[0]),
            bike: share(SHARE_KEYS[1]),
            transit: share(SHARE_KEYS[2]),
            car: share(SHARE_KEYS[3]),
        })
    }
}

/// `a26_2`: is the respondent currently a caregiver?
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Caregiver {
    Yes { satisfaction: Option<i64> },
    No,
}

impl Caregiver {
    pub fn from_answers(answers: &AnswerRecord) -> Self {
        match answers.code("a26_2") {
            Some(1) => Self::Yes {
                satisfaction: answers.code("a26_2_1"),
            },
            _ => Self::No,
        }
    }
}

/// `A0_3`: is the respondent part of the team responsible for the place?
/// Missing means no, as on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Respondent {
    ResponsibleTeam,
    User,
}

impl Respondent {
    pub fn from_answers(answers: &AnswerRecord) -> Self {
        match answers.code("A0_3") {
            Some(1) => Self::ResponsibleTeam,
            _ => Self::User,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Self::ResponsibleTeam => 1,
            Self::User => 2,
        }
    }
}

/// `a41_1`: are people counts from before and after the intervention available?
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dynamism {
    Counted {
        before: Option<f64>,
        after: Option<f64>,
    },
    /// No counts; the respondent's perception (`a41_2`) is used instead.
    Perceived(Option<i64>),
    Unanswered,
}

impl Dynamism {
    pub fn from_answers(answers: &AnswerRecord) -> Self {
        match answers.code("a41_1") {
            Some(1) => Self::Counted {
                before: answers.number("a41_before"),
                after: answers.number("a41_after"),
            },
            Some(2) => Self::Perceived(answers.code("a41_2")),
            _ => Self::Unanswered,
        }
    }
}

#[cfg(test)]
#[path = "gates_test.rs"]
mod tests;
