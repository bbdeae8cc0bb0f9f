use serde::Deserialize;
use serde::Serialize;

/// Result of comparing two moves, from the first mover's perspective.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Tie,
    Loss,
}

impl Outcome {
    /// +1 first wins, 0 tie, -1 second wins.
    pub fn signum(&self) -> i8 {
        match self {
            Self::Win => 1,
            Self::Tie => 0,
            Self::Loss => -1,
        }
    }
    /// Same result seen from the other side of the table.
    pub fn reverse(&self) -> Self {
        match self {
            Self::Win => Self::Loss,
            Self::Tie => Self::Tie,
            Self::Loss => Self::Win,
        }
    }
    /// Console label naming the winner.
    pub fn winner(&self) -> &'static str {
        match self {
            Self::Win => "Me",
            Self::Tie => "Tie",
            Self::Loss => "You",
        }
    }
}

impl From<Outcome> for i8 {
    fn from(outcome: Outcome) -> Self {
        outcome.signum()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.winner())
    }
}
