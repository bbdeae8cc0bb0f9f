//! Bounded multi-round matches, one driver per side of the session.
//!
//! - [`Round`] — both moves of one round and who won
//! - [`Scoreboard`] — running tally across rounds
//! - [`Host`] — listening side: accept, read greeting, play, close
//! - [`Guest`] — connecting side: dial, greet, play, close
mod guest;
mod host;
mod round;
mod scoreboard;

pub use guest::*;
pub use host::*;
pub use round::*;
pub use scoreboard::*;

use crate::*;
use tokio::io::AsyncRead;
use tokio::io::AsyncWrite;

/// Play exactly `games` rounds over an open session.
/// Each round starts from a fresh decision and a fresh peer move.
async fn rounds<S, P>(
    session: &mut Session<S>,
    player: &mut P,
    games: usize,
) -> Result<Scoreboard, SessionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
    P: Player,
{
    let mut board = Scoreboard::default();
    for index in 0..games {
        let mine = player.decide();
        let theirs = session.exchange(mine).await?;
        let round = Round::settle(index, mine, theirs);
        println!("{}", round);
        log::debug!("round {} of {}: {:?}", index + 1, games, round.outcome);
        player.notify(&round);
        board.record(round);
    }
    log::info!("match over after {} rounds, {}", games, board);
    Ok(board)
}
