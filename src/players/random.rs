use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Uniform random player over its own generator.
pub struct Random(SmallRng);

impl Random {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Random {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl From<Option<u64>> for Random {
    fn from(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_default()
    }
}

impl Player for Random {
    fn decide(&mut self) -> Move {
        Move::sample(&mut self.0)
    }
}
