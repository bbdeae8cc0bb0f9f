//! The move domain and the cyclic dominance rule.
//!
//! - [`Move`] — Rock, Paper, or Scissors
//! - [`Outcome`] — signed result of comparing two moves
//! - [`MoveError`] — a token outside the move domain
mod error;
mod moves;
mod outcome;

pub use error::*;
pub use moves::*;
pub use outcome::*;

use crate::Arbitrary;

/// Draw a move uniformly from the thread-local generator.
pub fn generate_move() -> Move {
    Move::random()
}

/// Compare two move tokens from the first mover's perspective.
///
/// Both tokens are validated before any comparison, first argument first,
/// so a bad first token is reported even when the second is also bad.
pub fn compare(a: &str, b: &str) -> Result<Outcome, MoveError> {
    let a = Move::try_from(a)?;
    let b = Move::try_from(b)?;
    Ok(a.compare(b))
}
