use anyhow::{Context, Result};
use pkg_constants::pki::SECRET_ALPHABET;
use rand::RngCore;
use rand::rngs::OsRng;

// Largest multiple of the alphabet size representable in a byte. Bytes at
// or above this are rejected so every alphabet index stays equally likely
// (plain modulo reduction would skew toward the first 256 % 65 characters).
const REJECT_THRESHOLD: u8 =
    ((u8::MAX as usize + 1) - (u8::MAX as usize + 1) % SECRET_ALPHABET.len()) as u8;

/// Generate a random string of exactly `length` characters from the
/// secret alphabet, suitable for URLs and basic-auth credentials.
///
/// The output is used as a credential, so a failing secure random source
/// is an error, never a silent fallback to weaker randomness.
pub fn random_string(length: usize) -> Result<String> {
    let mut out = String::with_capacity(length);
    let mut buf = [0u8; 128];

    while out.len() < length {
        OsRng
            .try_fill_bytes(&mut buf)
            .context("secure random source unavailable")?;
        for &byte in &buf {
            if out.len() == length {
                break;
            }
            if byte < REJECT_THRESHOLD {
                out.push(SECRET_ALPHABET[(byte as usize) % SECRET_ALPHABET.len()] as char);
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_length() {
        for len in [0, 1, 16, 64, 257] {
            let s = random_string(len).expect("random source available");
            assert_eq!(s.len(), len);
        }
    }

    #[test]
    fn alphabet_only() {
        let s = random_string(512).expect("random source available");
        for c in s.bytes() {
            assert!(
                SECRET_ALPHABET.contains(&c),
                "character {:?} outside the secret alphabet",
                c as char
            );
        }
    }

    #[test]
    fn successive_secrets_differ() {
        let a = random_string(32).expect("random source available");
        let b = random_string(32).expect("random source available");
        assert_ne!(a, b);
    }

    #[test]
    fn reject_threshold_is_multiple_of_alphabet() {
        assert_eq!(REJECT_THRESHOLD as usize % SECRET_ALPHABET.len(), 0);
        assert!(REJECT_THRESHOLD as usize + SECRET_ALPHABET.len() > u8::MAX as usize);
    }
}
