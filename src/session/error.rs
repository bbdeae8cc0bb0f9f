use super::*;
use crate::MoveError;

/// Errors that can occur while driving a session.
#[derive(Debug)]
pub enum SessionError {
    /// Socket failure.
    Io(std::io::Error),
    /// Peer hung up while we waited for a frame.
    Closed,
    /// Frame did not parse as a greeting.
    Malformed(String),
    /// Peer sent a token outside the move domain.
    Move(MoveError),
    /// Operation called in the wrong lifecycle phase.
    OutOfPhase { expected: Phase, actual: Phase },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "socket error: {}", e),
            Self::Closed => write!(f, "peer closed the session"),
            Self::Malformed(s) => write!(f, "malformed greeting: {:?}", s),
            Self::Move(e) => write!(f, "peer sent {}", e),
            Self::OutOfPhase { expected, actual } => {
                write!(f, "session is {}, expected {}", actual, expected)
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Move(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<MoveError> for SessionError {
    fn from(e: MoveError) -> Self {
        Self::Move(e)
    }
}
