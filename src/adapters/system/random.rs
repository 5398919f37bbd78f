//! Implements RandomSource with the thread-local rand generator.

use crate::ports::RandomSource;
use rand::Rng;

/// Uniform selection backed by `rand::rng()`.
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, upper: usize) -> usize {
        rand::rng().random_range(0..upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_stays_in_range() {
        let random = ThreadRandom;
        for _ in 0..100 {
            assert!(random.pick(3) < 3);
        }
        assert_eq!(random.pick(1), 0);
    }
}
