//! Classification tags and composite codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Taxonomy group tag assigned to a six-symbol sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupTag {
    A,
    B,
}

impl GroupTag {
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
        }
    }

    /// Parse `a`/`b`, case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(Self::A),
            'b' => Some(Self::B),
            _ => None,
        }
    }
}

impl fmt::Display for GroupTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Concatenated tags of consecutive pattern positions (`"aba"`, `"abba"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CompositeCode(SmallVec<[GroupTag; 4]>);

impl CompositeCode {
    pub fn from_tags(tags: impl IntoIterator<Item = GroupTag>) -> Self {
        Self(tags.into_iter().collect())
    }

    pub fn tags(&self) -> &[GroupTag] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first `n` tags as a string; shorter codes yield everything they have.
    pub fn prefix(&self, n: usize) -> String {
        self.0.iter().take(n).map(|t| t.as_char()).collect()
    }

    /// The tag at position `index`, if any.
    pub fn tag_at(&self, index: usize) -> Option<GroupTag> {
        self.0.get(index).copied()
    }
}

impl fmt::Display for CompositeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.0 {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

impl FromStr for CompositeCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| GroupTag::from_char(c).ok_or_else(|| format!("invalid tag '{c}' in '{s}'")))
            .collect::<Result<SmallVec<_>, _>>()
            .map(Self)
    }
}
