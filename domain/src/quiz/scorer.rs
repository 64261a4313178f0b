//! Questionnaire scoring
//!
//! Turns fifteen answers into a [`TypeCode`] with a fixed linear tally over
//! four independent axes. Each axis owns a window of consecutive questions:
//!
//! | Positions | Axis | Low letter | High letter |
//! |-----------|------|------------|-------------|
//! | 0..4   | Sociability | E | I |
//! | 4..8   | Perception  | N | S |
//! | 8..12  | Decision    | F | T |
//! | 12..15 | Structure   | P | J |
//!
//! An answer `v <= 2` adds `v` to the low counter; any other answer adds
//! `5 - v` to the high counter. The midpoint 3 therefore adds 2 to the
//! high counter. The low letter wins only on a strict majority; ties go to
//! [`Axis::tie_break`].

use super::answer::{AnswerSheet, LOW_BOUND, MAX_ANSWER};
use super::axis::{Axis, Letter};
use super::code::TypeCode;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Accumulated weight for each of the eight letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTallies {
    pub e: u32,
    pub i: u32,
    pub n: u32,
    pub s: u32,
    pub f: u32,
    pub t: u32,
    pub p: u32,
    pub j: u32,
}

impl AxisTallies {
    /// Counter for a letter
    pub fn get(&self, letter: Letter) -> u32 {
        match letter {
            Letter::E => self.e,
            Letter::I => self.i,
            Letter::N => self.n,
            Letter::S => self.s,
            Letter::F => self.f,
            Letter::T => self.t,
            Letter::P => self.p,
            Letter::J => self.j,
        }
    }

    fn slot(&mut self, letter: Letter) -> &mut u32 {
        match letter {
            Letter::E => &mut self.e,
            Letter::I => &mut self.i,
            Letter::N => &mut self.n,
            Letter::S => &mut self.s,
            Letter::F => &mut self.f,
            Letter::T => &mut self.t,
            Letter::P => &mut self.p,
            Letter::J => &mut self.j,
        }
    }

    /// `(low, high)` counters of an axis
    pub fn pair(&self, axis: Axis) -> (u32, u32) {
        (self.get(axis.low_letter()), self.get(axis.high_letter()))
    }

    /// Add one answer to the counters of its axis
    fn record(&mut self, axis: Axis, value: u8) {
        if value <= LOW_BOUND {
            *self.slot(axis.low_letter()) += u32::from(value);
        } else {
            *self.slot(axis.high_letter()) += u32::from(MAX_ANSWER - value);
        }
    }
}

/// Result of scoring an answer sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub code: TypeCode,
    pub tallies: AxisTallies,
}

/// Score a validated answer sheet. Never fails.
pub fn score_sheet(sheet: &AnswerSheet) -> ScoreOutcome {
    let mut tallies = AxisTallies::default();
    for (axis, value) in sheet.by_axis() {
        tallies.record(axis, value);
    }

    let code = TypeCode::from_axes(|axis| {
        let (low, high) = tallies.pair(axis);
        axis.resolve(low, high)
    });

    ScoreOutcome { code, tallies }
}

/// Score a raw answer sequence.
///
/// Fails with [`DomainError::InvalidInput`] when the sequence is not
/// exactly fifteen values in 1..=5. Pure: identical input always yields
/// identical output.
pub fn score(answers: &[u8]) -> Result<ScoreOutcome, DomainError> {
    let sheet = AnswerSheet::try_new(answers)?;
    Ok(score_sheet(&sheet))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::answer::ANSWER_COUNT;
    use proptest::prelude::*;

    fn letters(code: &TypeCode) -> String {
        code.to_string()
    }

    #[test]
    fn test_all_ones_resolve_to_low_letters() {
        let outcome = score(&[1; ANSWER_COUNT]).unwrap();
        assert_eq!(letters(&outcome.code), "ENFP");
        assert_eq!(outcome.tallies.pair(Axis::Sociability), (4, 0));
        assert_eq!(outcome.tallies.pair(Axis::Perception), (4, 0));
        assert_eq!(outcome.tallies.pair(Axis::Decision), (4, 0));
        assert_eq!(outcome.tallies.pair(Axis::Structure), (3, 0));
    }

    #[test]
    fn test_all_fives_tie_on_every_axis() {
        let outcome = score(&[5; ANSWER_COUNT]).unwrap();
        assert_eq!(outcome.tallies, AxisTallies::default());
        assert_eq!(letters(&outcome.code), "ISTJ");
        for _ in 0..10 {
            assert_eq!(score(&[5; ANSWER_COUNT]).unwrap(), outcome);
        }
    }

    #[test]
    fn test_midpoint_counts_toward_high_letter() {
        let outcome = score(&[3; ANSWER_COUNT]).unwrap();
        assert_eq!(outcome.tallies.pair(Axis::Sociability), (0, 8));
        assert_eq!(outcome.tallies.pair(Axis::Structure), (0, 6));
        assert_eq!(letters(&outcome.code), "ISTJ");
    }

    #[test]
    fn test_weights_per_value() {
        // Position 0 only, the rest neutral-high (5 adds nothing)
        let mut answers = [5u8; ANSWER_COUNT];
        for (value, low, high) in [(1, 1, 0), (2, 2, 0), (3, 0, 2), (4, 0, 1), (5, 0, 0)] {
            answers[0] = value;
            let outcome = score(&answers).unwrap();
            assert_eq!(
                outcome.tallies.pair(Axis::Sociability),
                (low, high),
                "value {}",
                value
            );
        }
    }

    #[test]
    fn test_each_window_feeds_only_its_axis() {
        let mut answers = [5u8; ANSWER_COUNT];
        answers[4..8].copy_from_slice(&[2, 2, 2, 2]);
        let outcome = score(&answers).unwrap();
        assert_eq!(outcome.tallies.n, 8);
        assert_eq!(outcome.tallies.e + outcome.tallies.f + outcome.tallies.p, 0);
        assert_eq!(letters(&outcome.code), "INTJ");
    }

    #[test]
    fn test_mixed_sample_sheet() {
        let outcome = score(&[1, 2, 1, 3, 2, 1, 4, 2, 1, 3, 2, 1, 4, 2, 1]).unwrap();
        // E: 1+2+1 = 4, I: 2
        assert_eq!(outcome.tallies.pair(Axis::Sociability), (4, 2));
        // N: 2+1+2 = 5, S: 1
        assert_eq!(outcome.tallies.pair(Axis::Perception), (5, 1));
        // F: 1+2+1 = 4, T: 2
        assert_eq!(outcome.tallies.pair(Axis::Decision), (4, 2));
        // P: 2+1 = 3, J: 1
        assert_eq!(outcome.tallies.pair(Axis::Structure), (3, 1));
        assert_eq!(letters(&outcome.code), "ENFP");
    }

    #[test]
    fn test_code_letters_come_from_matching_axes() {
        for value in 1..=5u8 {
            let outcome = score(&[value; ANSWER_COUNT]).unwrap();
            for (axis, letter) in Axis::ALL.iter().zip(outcome.code.letters()) {
                assert_eq!(letter.axis(), *axis);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_code_follows_axis_tallies(answers in prop::collection::vec(1u8..=5, ANSWER_COUNT)) {
            let outcome = score(&answers).unwrap();
            for (axis, letter) in Axis::ALL.iter().zip(outcome.code.letters()) {
                prop_assert_eq!(letter.axis(), *axis);
                let (low, high) = outcome.tallies.pair(*axis);
                let expected = if low > high { axis.low_letter() } else { axis.high_letter() };
                prop_assert_eq!(letter, expected);
            }
            prop_assert_eq!(score(&answers).unwrap(), outcome);
        }
    }

    #[test]
    fn test_score_is_pure() {
        let answers = [2, 4, 1, 5, 3, 3, 2, 1, 4, 4, 5, 1, 2, 3, 4];
        assert_eq!(score(&answers).unwrap(), score(&answers).unwrap());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(score(&[1; 14]).unwrap_err().is_invalid_input());
        assert!(score(&[1; 16]).unwrap_err().is_invalid_input());
        assert!(score(&[]).unwrap_err().is_invalid_input());

        let mut answers = [1u8; ANSWER_COUNT];
        answers[0] = 0;
        assert!(score(&answers).unwrap_err().is_invalid_input());
        answers[0] = 6;
        assert!(score(&answers).unwrap_err().is_invalid_input());
    }
}
