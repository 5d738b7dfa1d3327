//! Seeded random number generation.
//!
//! Every search run owns its generator; nothing is shared between runs.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seed used when a configuration leaves the seed unset.
pub const DEFAULT_SEED: u64 = 42;

/// Creates a reproducible generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
