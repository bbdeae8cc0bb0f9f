use super::*;

/// Always throws the same move.
#[derive(Debug, Clone, Copy)]
pub struct Constant(pub Move);

impl Player for Constant {
    fn decide(&mut self) -> Move {
        self.0
    }
}
