//! Two-party session over one bidirectional byte stream.
//!
//! Frames are UTF-8 lines. The connecting side opens with a [`Greeting`]
//! (`<token> <number>`), then each round both sides send one move token.
//!
//! ## Lifecycle
//!
//! [`Phase::AwaitingPeerHello`] → [`Phase::ExchangingMoves`] → [`Phase::Done`]
mod error;
mod greeting;
mod phase;
mod wire;

pub use error::*;
pub use greeting::*;
pub use phase::*;
pub use wire::*;
