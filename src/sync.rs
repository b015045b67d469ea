//! The heuristic provider's RNG behind a lock.

use core::ops::Range;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "std")]
type Lock<T> = std::sync::Mutex<T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Lock<T> = spin::Mutex<T>;

/// Seeded RNG that can be drawn from through `&self`.
pub struct SharedRng(Lock<ChaCha8Rng>);

impl SharedRng {
    pub fn seeded(seed: u64) -> Self {
        Self(Lock::new(ChaCha8Rng::seed_from_u64(seed)))
    }

    /// Draws a uniform value from `range`.
    pub fn roll(&self, range: Range<u8>) -> u8 {
        // A panic mid-draw leaves the RNG usable.
        #[cfg(feature = "std")]
        let mut rng = self
            .0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        #[cfg(all(not(feature = "std"), feature = "alloc"))]
        let mut rng = self.0.lock();

        rng.random_range(range)
    }
}
