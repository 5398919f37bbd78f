//! Host capability adapters: wall clock and randomness.

pub mod clock;
pub mod random;

pub use clock::SystemClock;
pub use random::ThreadRandom;
