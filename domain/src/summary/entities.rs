//! Letter summary entities

use crate::core::string::non_blank;
use crate::quiz::axis::Letter;
use crate::quiz::code::TypeCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Subject kind used when the owner left the breed empty
pub const DEFAULT_BREED: &str = "dog";

/// Who the summary is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryContext {
    pub pet_name: String,
    pub breed: String,
}

impl SummaryContext {
    pub fn new(pet_name: impl Into<String>, breed: impl Into<String>) -> Self {
        let pet_name = pet_name.into();
        let breed = breed.into();
        Self {
            pet_name: pet_name.trim().to_string(),
            breed: non_blank(&breed).unwrap_or(DEFAULT_BREED).to_string(),
        }
    }
}

/// Where the phrases of a [`LetterSummary`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarySource {
    /// Every phrase was produced by the text-generation service
    Remote,
    /// Every phrase was taken from the local phrase table
    Fallback,
}

/// One short phrase per letter of a type code.
///
/// Holds exactly the four letters of its code and never mixes sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterSummary {
    code: TypeCode,
    source: SummarySource,
    phrases: BTreeMap<Letter, String>,
}

impl LetterSummary {
    /// Build a summary by asking `phrase` for each letter of `code`
    pub fn from_fn(
        code: TypeCode,
        source: SummarySource,
        mut phrase: impl FnMut(Letter) -> String,
    ) -> Self {
        let phrases = code
            .letters()
            .into_iter()
            .map(|letter| (letter, phrase(letter)))
            .collect();
        Self {
            code,
            source,
            phrases,
        }
    }

    pub fn code(&self) -> TypeCode {
        self.code
    }

    pub fn source(&self) -> SummarySource {
        self.source
    }

    pub fn is_remote(&self) -> bool {
        self.source == SummarySource::Remote
    }

    /// Phrase for a letter, `None` if the letter is not part of the code
    pub fn get(&self, letter: Letter) -> Option<&str> {
        self.phrases.get(&letter).map(String::as_str)
    }

    /// Letters covered by this summary, in code order
    pub fn letters(&self) -> Vec<Letter> {
        self.code.letters().to_vec()
    }

    /// `(letter, phrase)` pairs in code order
    pub fn iter(&self) -> impl Iterator<Item = (Letter, &str)> {
        self.code
            .letters()
            .into_iter()
            .filter_map(|letter| self.get(letter).map(|phrase| (letter, phrase)))
    }
}

/// Lifecycle of one summary request.
///
/// `Idle -> Pending -> Fulfilled | Fallback`. There is no retry edge and a
/// settled state never changes again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SummaryState {
    #[default]
    Idle,
    Pending,
    Fulfilled(LetterSummary),
    Fallback(LetterSummary),
}

impl SummaryState {
    /// Move from `Idle` to `Pending`. Returns `false` for any other state.
    pub fn begin(&mut self) -> bool {
        if matches!(self, SummaryState::Idle) {
            *self = SummaryState::Pending;
            true
        } else {
            false
        }
    }

    /// Settle a pending request with its summary.
    ///
    /// The target state follows the summary's source. Returns `false` and
    /// leaves the state untouched unless the request is pending.
    pub fn settle(&mut self, summary: LetterSummary) -> bool {
        if !matches!(self, SummaryState::Pending) {
            return false;
        }
        *self = match summary.source() {
            SummarySource::Remote => SummaryState::Fulfilled(summary),
            SummarySource::Fallback => SummaryState::Fallback(summary),
        };
        true
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SummaryState::Pending)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, SummaryState::Fulfilled(_) | SummaryState::Fallback(_))
    }

    pub fn summary(&self) -> Option<&LetterSummary> {
        match self {
            SummaryState::Fulfilled(s) | SummaryState::Fallback(s) => Some(s),
            SummaryState::Idle | SummaryState::Pending => None,
        }
    }
}
