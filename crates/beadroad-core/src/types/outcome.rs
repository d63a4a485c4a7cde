//! Cell outcome values.

use serde::{Deserialize, Serialize};

/// The value held by one bead-road cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[default]
    Empty,
    Banker,
    Player,
    Tie,
}

impl Outcome {
    /// Upper-case symbol for a non-empty outcome.
    pub fn symbol(self) -> Option<char> {
        match self {
            Self::Banker => Some('B'),
            Self::Player => Some('P'),
            Self::Tie => Some('T'),
            Self::Empty => None,
        }
    }

    /// Parse a single symbol, case-insensitive. `.`, `-` and space mean empty.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'B' => Some(Self::Banker),
            'P' => Some(Self::Player),
            'T' => Some(Self::Tie),
            '.' | '-' | ' ' => Some(Self::Empty),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    pub fn is_tie(self) -> bool {
        self == Self::Tie
    }

    /// Banker or player: a value the taxonomy can classify.
    pub fn is_decided(self) -> bool {
        matches!(self, Self::Banker | Self::Player)
    }
}
