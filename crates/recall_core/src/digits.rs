//! Random digit string generation.

use rand::Rng;
use tracing::instrument;

/// Generates a string of exactly `length` decimal digits.
///
/// Each digit is drawn independently and uniformly from `0..=9` using the
/// thread-local PRNG. Not suitable for anything security related.
#[instrument]
pub fn generate(length: usize) -> String {
    generate_with(&mut rand::thread_rng(), length)
}

pub(crate) fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}
