//! Quiz input: command-line answer lists and the interactive runner

pub mod input;
pub mod runner;

pub use input::{parse_answers, parse_choice};
pub use runner::{QuizAnswers, QuizRunner};
