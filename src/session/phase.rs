/// Where a session stands in its lifecycle.
///
/// The session starts waiting on the greeting, spends every round in
/// `ExchangingMoves`, and ends once either side closes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Phase {
    AwaitingPeerHello,
    ExchangingMoves,
    Done,
}

impl Phase {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AwaitingPeerHello => write!(f, "awaiting peer hello"),
            Self::ExchangingMoves => write!(f, "exchanging moves"),
            Self::Done => write!(f, "done"),
        }
    }
}
