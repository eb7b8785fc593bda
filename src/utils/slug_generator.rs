//! Random slug generation.
//!
//! Slugs are drawn from a fixed alphabet that leaves out visually ambiguous
//! symbols (`0`, `1`, `l`). The alphabet is part of the public URL format and
//! must not change, or previously issued slugs stop looking like ours.

use rand::Rng;

/// Symbols a generated slug is drawn from.
pub const SLUG_ALPHABET: &str = "23456789abcdefghijkmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ-_";

/// Length of every generated slug.
pub const SLUG_LENGTH: usize = 6;

/// Generates a random slug of [`SLUG_LENGTH`] characters.
///
/// Each character is picked uniformly from [`SLUG_ALPHABET`]. No check is
/// made against existing slugs; the caller owns the store write.
///
/// # Examples
///
/// ```ignore
/// let slug = generate_slug();
/// assert_eq!(slug.len(), 6);
/// ```
pub fn generate_slug() -> String {
    let alphabet = SLUG_ALPHABET.as_bytes();
    let mut rng = rand::rng();

    (0..SLUG_LENGTH)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect()
}
