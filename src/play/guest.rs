use super::*;
use tokio::net::ToSocketAddrs;

/// Connecting side of a match. Opens with `hello <games>`.
pub struct Guest<P> {
    games: usize,
    player: P,
}

impl<P> Guest<P>
where
    P: Player,
{
    pub fn new(games: usize, player: P) -> Self {
        Self { games, player }
    }

    /// Dial the host, then play.
    pub async fn join<A: ToSocketAddrs>(&mut self, addr: A) -> Result<Scoreboard, SessionError> {
        let mut session = Session::connect(addr).await?;
        self.guest(&mut session).await
    }

    /// Drive an already-open session from the connecting side.
    pub async fn guest<S>(&mut self, session: &mut Session<S>) -> Result<Scoreboard, SessionError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        session.greet(&Greeting::new(GREETING, self.games as u64)).await?;
        let board = rounds(session, &mut self.player, self.games).await?;
        session.close().await?;
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn both_sides_agree() {
        let (a, b) = tokio::io::duplex(1024);
        let (mut a, mut b) = (Session::from(a), Session::from(b));
        let mut host = Host::new(3, Constant(Move::Rock));
        let mut guest = Guest::new(3, Constant(Move::Scissors));
        let (hosted, guested) = tokio::join!(host.host(&mut a), guest.guest(&mut b));
        let (hosted, guested) = (hosted.unwrap(), guested.unwrap());
        assert_eq!(hosted.to_string(), "3-0-0");
        assert_eq!(guested.to_string(), "0-3-0");
        assert_eq!(a.phase(), Phase::Done);
        assert_eq!(b.phase(), Phase::Done);
    }

    #[tokio::test]
    async fn mirrored_outcomes() {
        let (a, b) = tokio::io::duplex(1024);
        let (mut a, mut b) = (Session::from(a), Session::from(b));
        let mut host = Host::new(16, Random::seeded(1));
        let mut guest = Guest::new(16, Random::seeded(2));
        let (hosted, guested) = tokio::join!(host.host(&mut a), guest.guest(&mut b));
        let (hosted, guested) = (hosted.unwrap(), guested.unwrap());
        assert_eq!(hosted.played(), 16);
        for (h, g) in hosted.rounds.iter().zip(guested.rounds.iter()) {
            assert_eq!(h.mine, g.theirs);
            assert_eq!(h.theirs, g.mine);
            assert_eq!(h.outcome, g.outcome.reverse());
        }
        assert_eq!(hosted.wins, guested.losses);
        assert_eq!(hosted.ties, guested.ties);
    }

    #[tokio::test]
    async fn short_guest_leaves_host_hanging() {
        let (a, b) = tokio::io::duplex(1024);
        let (mut a, mut b) = (Session::from(a), Session::from(b));
        let mut host = Host::new(3, Constant(Move::Paper));
        let mut guest = Guest::new(1, Constant(Move::Paper));
        let (hosted, guested) = tokio::join!(host.host(&mut a), guest.guest(&mut b));
        assert_eq!(guested.unwrap().ties, 1);
        assert!(matches!(hosted, Err(SessionError::Closed)));
    }
}
