//! Questionnaire and scoring.
//!
//! - [`questions`]: the fifteen behaviour questions and the answer scale
//! - [`answer::AnswerSheet`]: a validated answer sequence
//! - [`axis::Axis`] / [`axis::Letter`]: the four axes and their eight letters
//! - [`code::TypeCode`]: the four-letter result
//! - [`scorer`]: the tally algorithm

pub mod answer;
pub mod axis;
pub mod code;
pub mod questions;
pub mod scorer;
