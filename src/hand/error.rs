/// A move token outside {rock, paper, scissors}.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    InvalidMove(String),
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMove(s) => write!(f, "invalid move: {:?}", s),
        }
    }
}

impl std::error::Error for MoveError {}
