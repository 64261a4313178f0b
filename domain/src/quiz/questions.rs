//! The fifteen behaviour questions and the five answer options

use super::answer::{ANSWER_COUNT, axis_for_position};
use super::axis::Axis;
use serde::Serialize;

/// A questionnaire item (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// 1-based question number
    pub id: u8,
    pub text: &'static str,
    /// The behaviour the owner agrees or disagrees with
    pub behavior: &'static str,
}

impl Question {
    /// Axis this question contributes to
    pub fn axis(&self) -> Axis {
        // ids are 1..=15, guaranteed by the table below
        axis_for_position(usize::from(self.id) - 1).unwrap_or(Axis::Structure)
    }
}

/// A selectable answer on the 1-5 agreement scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: u8,
    pub label: &'static str,
}

const QUESTIONS: [Question; ANSWER_COUNT] = [
    Question {
        id: 1,
        text: "When you take your dog somewhere new, it usually:",
        behavior: "Explores the new place on its own initiative.",
    },
    Question {
        id: 2,
        text: "When meeting strangers, your dog:",
        behavior: "Walks up to strangers to say hello.",
    },
    Question {
        id: 3,
        text: "When the doorbell rings, your dog:",
        behavior: "Rushes to the door to alert you.",
    },
    Question {
        id: 4,
        text: "At the dog park, your dog tends to:",
        behavior: "Joins the pack and plays right away.",
    },
    Question {
        id: 5,
        text: "When learning a new command, your dog:",
        behavior: "Picks up new commands quickly.",
    },
    Question {
        id: 6,
        text: "When it gets a new toy, your dog:",
        behavior: "Immediately tries out new ways to play with it.",
    },
    Question {
        id: 7,
        text: "On everyday walks, your dog usually:",
        behavior: "Walks ahead and leads the way.",
    },
    Question {
        id: 8,
        text: "When facing an obstacle such as furniture, your dog:",
        behavior: "Finds its own way around the obstacle.",
    },
    Question {
        id: 9,
        text: "When you feel down, your dog:",
        behavior: "Comes over to comfort you.",
    },
    Question {
        id: 10,
        text: "During training, your dog pays more attention to:",
        behavior: "Its interaction with you rather than the reward.",
    },
    Question {
        id: 11,
        text: "When another dog approaches, your dog:",
        behavior: "Greets it in a friendly way.",
    },
    Question {
        id: 12,
        text: "When you give an instruction, your dog usually:",
        behavior: "Follows the instruction promptly.",
    },
    Question {
        id: 13,
        text: "About its daily schedule, your dog:",
        behavior: "Relies on a fixed daily rhythm.",
    },
    Question {
        id: 14,
        text: "When plans change suddenly (like walk time), your dog:",
        behavior: "Accepts the new arrangement quickly.",
    },
    Question {
        id: 15,
        text: "When offered unfamiliar food, your dog:",
        behavior: "Boldly tries the new food.",
    },
];

const OPTIONS: [AnswerOption; 5] = [
    AnswerOption {
        value: 1,
        label: "Strongly agree",
    },
    AnswerOption {
        value: 2,
        label: "Agree",
    },
    AnswerOption {
        value: 3,
        label: "Neutral",
    },
    AnswerOption {
        value: 4,
        label: "Disagree",
    },
    AnswerOption {
        value: 5,
        label: "Strongly disagree",
    },
];

/// All questions in answer order
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// The answer scale, from strongest agreement to strongest disagreement
pub fn answer_options() -> &'static [AnswerOption] {
    &OPTIONS
}
