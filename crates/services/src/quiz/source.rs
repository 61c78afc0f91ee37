use quiz_core::model::{Catalog, Round};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies the round for each new question.
///
/// Production code uses [`ShuffledRounds`]; tests can script rounds or seed the RNG.
pub trait RoundSource: Send {
    fn draw(&mut self, catalog: &Catalog) -> Round;
}

/// Draws rounds by shuffling the catalog with a pseudo-random generator.
#[derive(Debug, Clone)]
pub struct ShuffledRounds<R = StdRng> {
    rng: R,
}

impl ShuffledRounds<StdRng> {
    /// Seeds the generator from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic source: the same seed always yields the same rounds.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> ShuffledRounds<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> RoundSource for ShuffledRounds<R> {
    fn draw(&mut self, catalog: &Catalog) -> Round {
        catalog.draw_round(&mut self.rng)
    }
}
