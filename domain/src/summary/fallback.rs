//! Local phrase table used when no remote summary is available

use super::entities::{LetterSummary, SummaryContext, SummarySource};
use crate::quiz::axis::Letter;
use crate::quiz::code::TypeCode;

/// Fixed phrase for a letter, filled in with the pet's name and breed
pub fn fallback_phrase(letter: Letter, context: &SummaryContext) -> String {
    let name = &context.pet_name;
    let breed = &context.breed;
    match letter {
        Letter::E => format!("{} loves company; a {} brimming with energy", name, breed),
        Letter::I => format!(
            "{} is quiet and reserved; a {} that needs a steady home",
            name, breed
        ),
        Letter::N => format!("{} has keen instincts and loves to explore", name),
        Letter::S => format!(
            "{} lives through the senses and prefers familiar routines",
            name
        ),
        Letter::F => format!("{} is affectionate and sticks close to family", name),
        Letter::T => format!("{} is level-headed and takes to clear training rules", name),
        Letter::P => format!("{} is easygoing and loves free play", name),
        Letter::J => format!(
            "{} is orderly, with clear routines for meals and training",
            name
        ),
    }
}

/// Summary built entirely from the local phrase table
pub fn fallback_summary(code: TypeCode, context: &SummaryContext) -> LetterSummary {
    LetterSummary::from_fn(code, SummarySource::Fallback, |letter| {
        fallback_phrase(letter, context)
    })
}
