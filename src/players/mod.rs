//! Move sources for either side of a session.
mod constant;
mod random;

pub use constant::*;
pub use random::*;

use crate::Move;
use crate::Round;

/// Pluggable decision-maker for one side of a match.
pub trait Player: Send {
    /// Pick the move for the next round.
    fn decide(&mut self) -> Move;
    /// Receive the settled round, both moves revealed.
    /// Default implementation ignores it.
    fn notify(&mut self, _: &Round) {}
}
