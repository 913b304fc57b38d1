//! Shareable seed generation.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};
use tracing::warn;

use crate::error::{AramError, AramResult};

/// Default number of characters in a generated seed.
pub const DEFAULT_SEED_LENGTH: usize = 15;

/// Default seed alphabet (62 alphanumerics).
pub const DEFAULT_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a seed from the operating system's randomness.
///
/// Falls back to a clock-seeded, non-cryptographic generator when the OS
/// source is unavailable; seeds are keys, not secrets.
pub fn generate_seed(length: usize, alphabet: &str) -> AramResult<String> {
    generate_seed_with(&mut OsRng, length, alphabet)
}

/// [`generate_seed`] with the default length and alphabet.
pub fn generate_default_seed() -> AramResult<String> {
    generate_seed(DEFAULT_SEED_LENGTH, DEFAULT_ALPHABET)
}

/// Generates a seed, reading bytes from `primary` first.
///
/// Each byte maps to `alphabet[byte % alphabet.len()]`, where the alphabet is
/// counted in `char`s.
pub fn generate_seed_with<R>(primary: &mut R, length: usize, alphabet: &str) -> AramResult<String>
where
    R: RngCore + ?Sized,
{
    if length == 0 {
        return Err(AramError::invalid_argument(
            "seed length must be a positive integer",
        ));
    }

    let characters: Vec<char> = alphabet.chars().collect();
    if characters.is_empty() {
        return Err(AramError::invalid_argument("seed alphabet cannot be empty"));
    }

    let bytes = random_bytes(primary, length);
    Ok(bytes
        .into_iter()
        .map(|b| characters[usize::from(b) % characters.len()])
        .collect())
}

fn random_bytes<R>(primary: &mut R, length: usize) -> Vec<u8>
where
    R: RngCore + ?Sized,
{
    let mut buffer = vec![0u8; length];
    if let Err(e) = primary.try_fill_bytes(&mut buffer) {
        warn!(error = %e, "secure randomness unavailable, using fallback generator");
        fallback_rng().fill_bytes(&mut buffer);
    }
    buffer
}

fn fallback_rng() -> SmallRng {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    SmallRng::seed_from_u64(nanos ^ u64::from(std::process::id()))
}
