//! Random Source Seeding
//!
//! Every sampling decision gets a freshly seeded `StdRng`. Seeds are chained:
//! each new source draws the seed for the next one, so a burst of calls
//! inside one clock tick still produces different sources. Only the first
//! source (or the first after the chain lands on 0) is seeded from the clock.
//!
//! None of this is cryptographically strong. It is meant for placeholder data.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::trace;

/// Hands out random sources. The single seam tests use to control draws.
pub trait SeedSource {
    type Rng: RngCore;

    /// Build the next source, advancing whatever state the seeder keeps
    fn next_rng(&self) -> Self::Rng;
}

/// Chained seeder shared by every draw of a generator.
///
/// `0` means "unset": the next source is seeded from the clock.
#[derive(Debug, Default)]
pub struct ChainedSeeder {
    next_seed: Mutex<u64>,
}

impl ChainedSeeder {
    /// Unset chain, first source seeded from the clock
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain starting at `seed`, for reproducible sequences
    pub fn from_seed(seed: u64) -> Self {
        Self {
            next_seed: Mutex::new(seed),
        }
    }

    /// Seed the next source will be built from (0 = clock)
    pub fn peek(&self) -> u64 {
        *self.next_seed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SeedSource for ChainedSeeder {
    type Rng = StdRng;

    fn next_rng(&self) -> StdRng {
        // The u64 is valid even if a holder panicked
        let mut next_seed = self.next_seed.lock().unwrap_or_else(PoisonError::into_inner);

        let seed = match *next_seed {
            0 => clock_seed(),
            chained => chained,
        };
        let mut rng = StdRng::seed_from_u64(seed);
        *next_seed = rng.gen();

        trace!(seed, next = *next_seed, "seeded random source");
        rng
    }
}

/// Nanoseconds since the epoch, or the Unix seconds if out of i64 range
fn clock_seed() -> u64 {
    let now = chrono::Utc::now();
    now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp()) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_advances_every_call() {
        let seeder = ChainedSeeder::from_seed(42);
        assert_eq!(seeder.peek(), 42);

        let _ = seeder.next_rng();
        let first = seeder.peek();
        assert_ne!(first, 42);

        let _ = seeder.next_rng();
        assert_ne!(seeder.peek(), first);
    }

    #[test]
    fn test_same_seed_same_sources() {
        let a = ChainedSeeder::from_seed(7);
        let b = ChainedSeeder::from_seed(7);

        for _ in 0..5 {
            let x: u64 = a.next_rng().gen();
            let y: u64 = b.next_rng().gen();
            assert_eq!(x, y);
        }
    }

    #[test]
    fn test_chained_seed_is_first_draw_of_source() {
        let seeder = ChainedSeeder::from_seed(1234);
        let _ = seeder.next_rng();

        let mut expected = StdRng::seed_from_u64(1234);
        assert_eq!(seeder.peek(), expected.gen::<u64>());
    }

    #[test]
    fn test_unset_chain_seeds_from_clock() {
        let seeder = ChainedSeeder::new();
        assert_eq!(seeder.peek(), 0);

        let _ = seeder.next_rng();
        assert_ne!(seeder.peek(), 0);
    }

    #[test]
    fn test_consecutive_sources_differ() {
        let seeder = ChainedSeeder::new();
        let draws: Vec<u64> = (0..20).map(|_| seeder.next_rng().gen()).collect();
        let mut unique = draws.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), draws.len());
    }
}
