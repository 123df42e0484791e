//! PKI parameters.

/// Organization name stamped into every certificate subject.
pub const ORGANIZATION: &str = "Rudder Utility Cluster";

/// Common name of the ephemeral root CA.
pub const CA_COMMON_NAME: &str = "Rudder Private Certificate Authority";

/// Certificate validity in days, for both the CA and the server leaf.
/// 13 months is the maximum accepted by major browsers.
pub const VALIDITY_DAYS: i64 = 375;

/// RSA modulus size in bits. 2048 is the low-resource /
/// max-compatibility floor.
pub const RSA_BITS: usize = 2048;

/// Serial numbers are this many random bytes (128 bits).
pub const SERIAL_NUMBER_BYTES: usize = 16;

/// Alphabet for generated secrets. The three symbols are safe inside
/// URLs and basic-auth credentials.
pub const SECRET_ALPHABET: &[u8] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!~-";
