//! Deterministic RNG with BLAKE3 seed derivation.
//!
//! The only randomness in generation is the timeline ordering jitter. It
//! flows through a PCG32 stream derived from the base seed and a string key,
//! so separate concerns draw from independent, reproducible streams.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 from a 32-bit seed, expanded to 64 bits by mirroring the
/// value into both halves.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives an independent seed for a named stream from the base seed.
pub fn derive_stream_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}

/// RNG for a named stream: derive the stream seed, then build the generator.
pub fn stream_rng(base_seed: u32, key: &str) -> Pcg32 {
    create_rng(derive_stream_seed(base_seed, key))
}
