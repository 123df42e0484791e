use pkg_constants::pki;
use time::Duration;

/// Issuer parameters, passed explicitly so callers (and tests) can
/// shrink validity windows or key sizes without touching globals.
#[derive(Debug, Clone)]
pub struct PkiConfig {
    /// Organization name stamped into every certificate subject.
    pub organization: String,
    /// Common name of the ephemeral root CA.
    pub ca_common_name: String,
    /// Validity window for both the CA and the server leaf.
    pub validity: Duration,
    /// RSA modulus size for every generated keypair.
    pub rsa_bits: usize,
}

impl Default for PkiConfig {
    fn default() -> Self {
        Self {
            organization: pki::ORGANIZATION.to_string(),
            ca_common_name: pki::CA_COMMON_NAME.to_string(),
            validity: Duration::days(pki::VALIDITY_DAYS),
            rsa_bits: pki::RSA_BITS,
        }
    }
}
