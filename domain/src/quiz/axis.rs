//! Personality axes and their letters

use serde::{Deserialize, Serialize};

/// One of the four independent binary axes of a type code.
///
/// Axes are listed in code order: the first letter of a code always comes
/// from [`Axis::Sociability`], the last from [`Axis::Structure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Outward (E) vs inward (I)
    Sociability,
    /// Intuitive (N) vs sensing (S)
    Perception,
    /// Feeling (F) vs thinking (T)
    Decision,
    /// Flexible (P) vs judging (J)
    Structure,
}

impl Axis {
    /// All axes in code order
    pub const ALL: [Axis; 4] = [
        Axis::Sociability,
        Axis::Perception,
        Axis::Decision,
        Axis::Structure,
    ];

    /// Letter fed by answers at or below the low bound (value 1 or 2)
    pub fn low_letter(self) -> Letter {
        match self {
            Axis::Sociability => Letter::E,
            Axis::Perception => Letter::N,
            Axis::Decision => Letter::F,
            Axis::Structure => Letter::P,
        }
    }

    /// Letter fed by answers above the low bound (value 3, 4 or 5)
    pub fn high_letter(self) -> Letter {
        match self {
            Axis::Sociability => Letter::I,
            Axis::Perception => Letter::S,
            Axis::Decision => Letter::T,
            Axis::Structure => Letter::J,
        }
    }

    /// Letter chosen when both counters of the axis are equal.
    ///
    /// The low letter wins only on a strict majority, so a tie always
    /// resolves to the second-listed letter of the pair.
    pub fn tie_break(self) -> Letter {
        self.high_letter()
    }

    /// Resolve the axis from its two counters
    pub fn resolve(self, low: u32, high: u32) -> Letter {
        if low > high {
            self.low_letter()
        } else {
            self.tie_break()
        }
    }

    /// Position of this axis inside a type code
    pub fn index(self) -> usize {
        match self {
            Axis::Sociability => 0,
            Axis::Perception => 1,
            Axis::Decision => 2,
            Axis::Structure => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Sociability => "sociability",
            Axis::Perception => "perception",
            Axis::Decision => "decision",
            Axis::Structure => "structure",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single letter of a type code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    E,
    I,
    N,
    S,
    F,
    T,
    P,
    J,
}

impl Letter {
    /// All eight letters, pairwise per axis
    pub const ALL: [Letter; 8] = [
        Letter::E,
        Letter::I,
        Letter::N,
        Letter::S,
        Letter::F,
        Letter::T,
        Letter::P,
        Letter::J,
    ];

    /// The axis this letter belongs to
    pub fn axis(self) -> Axis {
        match self {
            Letter::E | Letter::I => Axis::Sociability,
            Letter::N | Letter::S => Axis::Perception,
            Letter::F | Letter::T => Axis::Decision,
            Letter::P | Letter::J => Axis::Structure,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::E => 'E',
            Letter::I => 'I',
            Letter::N => 'N',
            Letter::S => 'S',
            Letter::F => 'F',
            Letter::T => 'T',
            Letter::P => 'P',
            Letter::J => 'J',
        }
    }

    /// Parse an upper-case code letter
    pub fn from_char(c: char) -> Option<Letter> {
        Letter::ALL.into_iter().find(|l| l.as_char() == c)
    }

    /// Key used for this letter in JSON objects
    pub fn as_str(self) -> &'static str {
        match self {
            Letter::E => "E",
            Letter::I => "I",
            Letter::N => "N",
            Letter::S => "S",
            Letter::F => "F",
            Letter::T => "T",
            Letter::P => "P",
            Letter::J => "J",
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
