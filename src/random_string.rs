use rand::Rng;

use crate::error::{Error, Result};

/// Draws `length` characters from `alphabet`, each one picked independently and uniformly.
///
/// The alphabet is treated as a sequence of chars, so a character that occurs twice is twice
/// as likely to be picked.
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, length: usize, alphabet: &str) -> Result<String> {
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    let random: String = (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect();
    Ok(random)
}

#[cfg(test)]
#[path = "tests/random_string.rs"]
mod random_string_tests;
