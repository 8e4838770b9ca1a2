//! Per-category fortune scores.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// A drawn score for a single category: always 3, 4, or 5 stars.
///
/// The advice catalog has one entry per possible score, so values outside
/// 3-5 are unrepresentable rather than checked at lookup time.
/// Serializes as the plain star count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Score {
    /// Three stars.
    Three,
    /// Four stars.
    Four,
    /// Five stars.
    Five,
}

impl Score {
    /// All possible scores, in ascending order.
    pub const ALL: [Score; 3] = [Self::Three, Self::Four, Self::Five];

    /// Sample a score uniformly from {3, 4, 5}.
    pub fn sample(rng: &mut StdRng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// The star count (3..=5).
    pub fn stars(self) -> u32 {
        match self {
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    /// Index into a category's advice list (`stars - 3`, so 0..=2).
    pub fn index(self) -> usize {
        (self.stars() - 3) as usize
    }
}

impl From<Score> for u32 {
    fn from(score: Score) -> Self {
        score.stars()
    }
}

impl TryFrom<u32> for Score {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            other => Err(format!("score out of range (expected 3-5): {other}")),
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/5", self.stars())
    }
}
