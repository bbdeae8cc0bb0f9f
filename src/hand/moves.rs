use super::*;
use crate::Arbitrary;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// A throw in Rock-Paper-Scissors.
///
/// Standard rules apply: Rock beats Scissors, Scissors beats Paper,
/// Paper beats Rock. The discriminants place every move one step
/// ahead of the move it beats, so dominance reduces to arithmetic mod 3.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Rock — beats Scissors, loses to Paper.
    Rock = 0,
    /// Paper — beats Rock, loses to Scissors.
    Paper = 1,
    /// Scissors — beats Paper, loses to Rock.
    Scissors = 2,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Position in the cycle, 0..3.
    pub fn index(&self) -> u8 {
        *self as u8
    }
    /// Draw from a caller-owned generator.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from(rng.random_range(0..3u8))
    }
    /// `(a - b + 3) % 3`: 0 tie, 1 self wins, 2 other wins.
    pub fn compare(&self, other: Move) -> Outcome {
        match (self.index() + 3 - other.index()) % 3 {
            0 => Outcome::Tie,
            1 => Outcome::Win,
            _ => Outcome::Loss,
        }
    }
    pub fn beats(&self, other: Move) -> bool {
        self.compare(other) == Outcome::Win
    }
    /// The move that beats this one.
    pub fn counter(&self) -> Self {
        Self::from(self.index() + 1)
    }
    pub fn token(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }
}

/// Exhaustive decoding; any byte lands in the domain.
impl From<u8> for Move {
    fn from(n: u8) -> Self {
        match n % 3 {
            0 => Self::Rock,
            1 => Self::Paper,
            _ => Self::Scissors,
        }
    }
}

impl From<Move> for u8 {
    fn from(m: Move) -> Self {
        m.index()
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        Self::from(rand::random_range(0..3u8))
    }
}

impl TryFrom<&str> for Move {
    type Error = MoveError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" => Ok(Self::Rock),
            "paper" | "p" => Ok(Self::Paper),
            "scissors" | "s" => Ok(Self::Scissors),
            _ => Err(MoveError::InvalidMove(s.to_string())),
        }
    }
}

impl std::str::FromStr for Move {
    type Err = MoveError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
