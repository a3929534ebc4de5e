//! Deterministic RNG wrapper used by the board shuffler.
//!
//! Every random decision in the simulation flows through one `BoardRng`, so
//! fixing the seed fixes the whole snapshot sequence.  Unseeded runs draw a
//! seed from the wall clock, giving the usual "different board every launch"
//! behaviour.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Simulation-level RNG for board randomisation.
pub struct BoardRng(SmallRng);

impl BoardRng {
    /// Seed deterministically.
    pub fn new(seed: u64) -> Self {
        BoardRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from the wall clock (nanoseconds since the epoch).
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        BoardRng::new(nanos)
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
