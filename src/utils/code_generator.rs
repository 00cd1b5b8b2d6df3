//! Short code generation.

use rand::Rng;

/// Alphabet for short codes: 26 lowercase + 26 uppercase + 10 digits.
pub const CODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of every generated short code.
///
/// With 62 symbols and 8 positions the code space holds 62^8 (~2.18e14)
/// values.
pub const CODE_LENGTH: usize = 8;

/// Draws a single candidate code: [`CODE_LENGTH`] independent uniform picks
/// from [`CODE_ALPHABET`].
///
/// Uniqueness against live codes is the caller's concern; the repository
/// redraws on collision while holding its write lock.
pub fn random_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}
