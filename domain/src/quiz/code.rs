//! Four-letter type code value object

use super::axis::{Axis, Letter};
use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A personality type code such as `ENFP` (Value Object)
///
/// Always holds exactly one letter per [`Axis`], in axis order. There is
/// no way to build a code with a letter in the wrong position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeCode {
    letters: [Letter; 4],
}

impl TypeCode {
    /// Build a code from one letter per axis.
    ///
    /// Returns an error if a letter sits on the wrong axis.
    pub fn new(letters: [Letter; 4]) -> Result<Self, DomainError> {
        for (axis, letter) in Axis::ALL.iter().zip(letters.iter()) {
            if letter.axis() != *axis {
                return Err(DomainError::InvalidCode(format!(
                    "letter {} cannot appear at the {} position",
                    letter, axis
                )));
            }
        }
        Ok(Self { letters })
    }

    /// Build a code from per-axis resolution without re-validating
    pub(crate) fn from_axes(resolve: impl Fn(Axis) -> Letter) -> Self {
        Self {
            letters: Axis::ALL.map(resolve),
        }
    }

    /// Letters in code order
    pub fn letters(&self) -> [Letter; 4] {
        self.letters
    }

    /// Letter chosen for an axis
    pub fn letter(&self, axis: Axis) -> Letter {
        self.letters[axis.index()]
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.letter(letter.axis()) == letter
    }

    /// All sixteen codes, ordered by letter position
    pub fn all() -> Vec<TypeCode> {
        let mut codes = Vec::with_capacity(16);
        for e in [Letter::E, Letter::I] {
            for n in [Letter::N, Letter::S] {
                for f in [Letter::F, Letter::T] {
                    for p in [Letter::P, Letter::J] {
                        codes.push(TypeCode {
                            letters: [e, n, f, p],
                        });
                    }
                }
            }
        }
        codes
    }
}

impl std::fmt::Display for TypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for TypeCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 4 {
            return Err(DomainError::InvalidCode(format!(
                "'{}' must have exactly 4 letters",
                s
            )));
        }

        let mut letters = [Letter::E; 4];
        for (slot, c) in letters.iter_mut().zip(chars) {
            *slot = Letter::from_char(c.to_ascii_uppercase())
                .ok_or_else(|| DomainError::InvalidCode(format!("unknown letter '{}'", c)))?;
        }
        TypeCode::new(letters)
    }
}

impl Serialize for TypeCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypeCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
