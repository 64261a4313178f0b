//! Answer sheet value object

use super::axis::Axis;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of questions in the questionnaire
pub const ANSWER_COUNT: usize = 15;

/// Smallest accepted answer ("strongly agree")
pub const MIN_ANSWER: u8 = 1;

/// Largest accepted answer ("strongly disagree")
pub const MAX_ANSWER: u8 = 5;

/// Answers at or below this value lean toward the low letter of an axis
pub const LOW_BOUND: u8 = 2;

/// Axis windows over the answer positions, in code order.
const WINDOWS: [(Axis, std::ops::Range<usize>); 4] = [
    (Axis::Sociability, 0..4),
    (Axis::Perception, 4..8),
    (Axis::Decision, 8..12),
    (Axis::Structure, 12..15),
];

/// Axis a question position contributes to
pub fn axis_for_position(position: usize) -> Option<Axis> {
    WINDOWS
        .iter()
        .find(|(_, range)| range.contains(&position))
        .map(|(axis, _)| *axis)
}

/// Positions that feed a given axis
pub fn positions_for_axis(axis: Axis) -> std::ops::Range<usize> {
    WINDOWS[axis.index()].1.clone()
}

/// A complete, validated set of fifteen answers (Value Object)
///
/// Order matters: the position of each answer decides which axis it
/// counts toward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct AnswerSheet {
    values: [u8; ANSWER_COUNT],
}

impl AnswerSheet {
    /// Validate a raw answer slice.
    ///
    /// Fails with [`DomainError::InvalidInput`] when the length is not
    /// exactly [`ANSWER_COUNT`] or any value is outside
    /// [`MIN_ANSWER`]..=[`MAX_ANSWER`].
    pub fn try_new(answers: &[u8]) -> Result<Self, DomainError> {
        let values: [u8; ANSWER_COUNT] = answers.try_into().map_err(|_| {
            DomainError::InvalidInput(format!(
                "expected {} answers, got {}",
                ANSWER_COUNT,
                answers.len()
            ))
        })?;

        if let Some((position, value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(MIN_ANSWER..=MAX_ANSWER).contains(*v))
        {
            return Err(DomainError::InvalidInput(format!(
                "answer {} is {}, expected a value from {} to {}",
                position + 1,
                value,
                MIN_ANSWER,
                MAX_ANSWER
            )));
        }

        Ok(Self { values })
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Iterate `(axis, value)` pairs in question order
    pub fn by_axis(&self) -> impl Iterator<Item = (Axis, u8)> + '_ {
        Axis::ALL.into_iter().flat_map(move |axis| {
            self.values[positions_for_axis(axis)]
                .iter()
                .map(move |v| (axis, *v))
        })
    }
}

impl TryFrom<Vec<u8>> for AnswerSheet {
    type Error = DomainError;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        AnswerSheet::try_new(&values)
    }
}

impl From<AnswerSheet> for Vec<u8> {
    fn from(sheet: AnswerSheet) -> Self {
        sheet.values.to_vec()
    }
}
