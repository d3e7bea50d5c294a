use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A target letter of the manual alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

/// A value that does not name a letter A-Z.
///
/// Raised at the conversion boundary. A caller that reaches the classifier
/// with anything else has a bug; it is never a sensor condition.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported letter {0:?}: expected a single ASCII letter A-Z")]
pub struct UnsupportedLetter(pub String);

impl Letter {
    pub const ALL: [Letter; 26] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::H,
        Letter::I,
        Letter::J,
        Letter::K,
        Letter::L,
        Letter::M,
        Letter::N,
        Letter::O,
        Letter::P,
        Letter::Q,
        Letter::R,
        Letter::S,
        Letter::T,
        Letter::U,
        Letter::V,
        Letter::W,
        Letter::X,
        Letter::Y,
        Letter::Z,
    ];

    /// Alphabet position, `A = 0`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Letter> {
        Self::ALL.get(index).copied()
    }

    #[inline]
    pub fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Following letter, wrapping from Z back to A.
    pub fn next(self) -> Letter {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding letter, staying at A.
    pub fn previous(self) -> Letter {
        Self::ALL[self.index().saturating_sub(1)]
    }

    /// Parse a navigation code: exactly one ASCII letter, either case.
    pub fn from_code(code: &str) -> Option<Letter> {
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::try_from(c).ok(),
            _ => None,
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = UnsupportedLetter;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if !c.is_ascii_alphabetic() {
            return Err(UnsupportedLetter(c.to_string()));
        }
        let upper = c.to_ascii_uppercase() as u8;
        Ok(Self::ALL[(upper - b'A') as usize])
    }
}

impl FromStr for Letter {
    type Err = UnsupportedLetter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Letter::from_code(s).ok_or_else(|| UnsupportedLetter(s.to_string()))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
