//! Random number generator construction.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the generator for one run: deterministic when a seed is given,
/// freshly seeded otherwise.
pub(crate) fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}
