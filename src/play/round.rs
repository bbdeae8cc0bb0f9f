use crate::*;
use serde::Serialize;

/// One settled round, seen from our side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Round {
    pub index: usize,
    pub mine: Move,
    pub theirs: Move,
    pub outcome: Outcome,
}

impl Round {
    pub fn settle(index: usize, mine: Move, theirs: Move) -> Self {
        Self {
            index,
            mine,
            theirs,
            outcome: mine.compare(theirs),
        }
    }
}

/// Console report, as printed after every round.
impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Me: {}", self.mine)?;
        writeln!(f, "You: {}", self.theirs)?;
        write!(f, "Winner: {}", self.outcome.winner())
    }
}
