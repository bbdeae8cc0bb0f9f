use super::*;
use serde::Serialize;

/// Running tally of a match, with the full round history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
    pub rounds: Vec<Round>,
}

impl Scoreboard {
    pub fn record(&mut self, round: Round) {
        match round.outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
        self.rounds.push(round);
    }
    pub fn played(&self) -> usize {
        self.rounds.len()
    }
    /// Who is ahead on rounds won.
    pub fn leader(&self) -> Outcome {
        match self.wins.cmp(&self.losses) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Tie,
            std::cmp::Ordering::Less => Outcome::Loss,
        }
    }
    pub fn json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// W-L-T
impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.ties)
    }
}
