use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const STREAM_MULTIPLIER: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seeded random source handed to anything that needs randomness, so games are reproducible.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent generator for the `stream`-th worker of a session.
    pub fn for_stream(&self, stream: u64) -> Self {
        Self::new(self.seed ^ stream.wrapping_add(1).wrapping_mul(STREAM_MULTIPLIER))
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }
}
