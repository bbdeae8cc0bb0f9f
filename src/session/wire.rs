use super::*;
use crate::Move;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncRead;
use tokio::io::AsyncWrite;
use tokio::io::AsyncWriteExt;
use tokio::io::BufReader;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::net::ToSocketAddrs;

/// One peer on the other end of one stream.
///
/// Owns the stream exclusively for its lifetime. Every operation checks
/// the lifecycle [`Phase`] first, so a round cannot start before the
/// greeting or after close.
pub struct Session<S> {
    stream: BufReader<S>,
    phase: Phase,
}

impl Session<TcpStream> {
    /// Block until one peer connects.
    pub async fn accept(listener: &TcpListener) -> Result<Self, SessionError> {
        let (stream, addr) = listener.accept().await?;
        log::info!("peer connected from {}", addr);
        Ok(Self::from(stream))
    }
    /// Dial the listening side.
    pub async fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self, SessionError> {
        let stream = TcpStream::connect(addr).await?;
        log::info!("connected to {}", stream.peer_addr()?);
        Ok(Self::from(stream))
    }
}

impl<S> From<S> for Session<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    fn from(stream: S) -> Self {
        Self {
            stream: BufReader::new(stream),
            phase: Phase::AwaitingPeerHello,
        }
    }
}

impl<S> Session<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Listening side: wait for the peer's greeting.
    pub async fn hello(&mut self) -> Result<Greeting, SessionError> {
        self.require(Phase::AwaitingPeerHello)?;
        let greeting = self.recv().await?.parse::<Greeting>()?;
        log::debug!("received greeting {:?}", greeting);
        self.advance(Phase::ExchangingMoves);
        Ok(greeting)
    }

    /// Connecting side: open with our greeting.
    pub async fn greet(&mut self, greeting: &Greeting) -> Result<(), SessionError> {
        self.require(Phase::AwaitingPeerHello)?;
        self.send(&greeting.to_string()).await?;
        log::debug!("sent greeting {:?}", greeting);
        self.advance(Phase::ExchangingMoves);
        Ok(())
    }

    /// Send our move, then wait for the peer's.
    ///
    /// Any failure past the phase check ends the session.
    pub async fn exchange(&mut self, mine: Move) -> Result<Move, SessionError> {
        self.require(Phase::ExchangingMoves)?;
        match self.trade(mine).await {
            Ok(theirs) => Ok(theirs),
            Err(e) => {
                log::warn!("exchange failed: {}", e);
                self.advance(Phase::Done);
                Err(e)
            }
        }
    }

    /// Flush and shut down our write half.
    pub async fn close(&mut self) -> Result<(), SessionError> {
        if self.phase.is_done() {
            return Ok(());
        }
        self.advance(Phase::Done);
        self.stream.get_mut().flush().await?;
        self.stream.get_mut().shutdown().await?;
        Ok(())
    }

    fn require(&self, expected: Phase) -> Result<(), SessionError> {
        match self.phase == expected {
            true => Ok(()),
            false => Err(SessionError::OutOfPhase {
                expected,
                actual: self.phase,
            }),
        }
    }

    fn advance(&mut self, next: Phase) {
        log::debug!("session {} -> {}", self.phase, next);
        self.phase = next;
    }

    async fn trade(&mut self, mine: Move) -> Result<Move, SessionError> {
        self.send(mine.token()).await?;
        let frame = self.recv().await?;
        let theirs = Move::try_from(frame.as_str())?;
        log::debug!("exchanged {} for {}", mine, theirs);
        Ok(theirs)
    }

    async fn send(&mut self, frame: &str) -> Result<(), SessionError> {
        let writer = self.stream.get_mut();
        writer.write_all(frame.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        Ok(())
    }

    async fn recv(&mut self) -> Result<String, SessionError> {
        let ref mut line = String::new();
        match self.stream.read_line(line).await? {
            0 => Err(SessionError::Closed),
            _ => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}
