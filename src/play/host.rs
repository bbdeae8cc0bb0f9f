use super::*;
use tokio::net::TcpListener;

/// Listening side of a match.
///
/// Accepts one peer, reads its greeting, then plays its own configured
/// number of rounds. The greeting's number is advisory only.
pub struct Host<P> {
    games: usize,
    player: P,
}

impl<P> Host<P>
where
    P: Player,
{
    pub fn new(games: usize, player: P) -> Self {
        Self { games, player }
    }

    /// Block for a single peer on `listener`, then play.
    pub async fn serve(&mut self, listener: &TcpListener) -> Result<Scoreboard, SessionError> {
        let mut session = Session::accept(listener).await?;
        self.host(&mut session).await
    }

    /// Drive an already-open session from the listening side.
    pub async fn host<S>(&mut self, session: &mut Session<S>) -> Result<Scoreboard, SessionError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let greeting = session.hello().await?;
        log::info!("peer says {}", greeting);
        if greeting.number != self.games as u64 {
            log::warn!(
                "peer expects {} rounds, playing {}",
                greeting.number,
                self.games
            );
        }
        let board = rounds(session, &mut self.player, self.games).await?;
        session.close().await?;
        Ok(board)
    }
}
