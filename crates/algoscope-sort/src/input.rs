use algoscope_core::limits::{clamp_array_size, MAX_ARRAY_VALUE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic random input: the same `(size, seed)` always gives the same
/// array. Size is clamped to the accepted range and values lie in
/// `1..=MAX_ARRAY_VALUE`.
pub fn random_array(size: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..clamp_array_size(size))
        .map(|_| rng.gen_range(1..=MAX_ARRAY_VALUE))
        .collect()
}
