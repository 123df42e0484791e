use anyhow::{Context, Result};
use rand::rngs::OsRng;
use rcgen::KeyPair;
use rsa::RsaPrivateKey;
use rsa::pkcs1::{EncodeRsaPrivateKey, LineEnding};
use rsa::pkcs8::EncodePrivateKey;

/// A freshly generated RSA keypair for exactly one certificate.
///
/// Holds both the raw key (for PKCS#1 persistence) and its rcgen signing
/// handle. The PEM form is only produced on demand, so keys that are
/// never persisted (the CA's) are never serialized.
pub struct RsaKeyMaterial {
    private: RsaPrivateKey,
    key_pair: KeyPair,
}

impl RsaKeyMaterial {
    /// Generate a new keypair with a `bits`-bit modulus from the OS
    /// secure random source.
    pub fn generate(bits: usize) -> Result<Self> {
        let private =
            RsaPrivateKey::new(&mut OsRng, bits).context("generate RSA private key")?;
        let pkcs8 = private
            .to_pkcs8_der()
            .context("encode generated RSA key as PKCS#8")?;
        let key_pair = KeyPair::try_from(pkcs8.as_bytes())
            .context("load generated RSA key for certificate signing")?;

        Ok(Self { private, key_pair })
    }

    /// Signing handle for certificate construction.
    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    /// Consume the material, keeping only the signing handle.
    pub fn into_key_pair(self) -> KeyPair {
        self.key_pair
    }

    /// PKCS#1 PEM encoding ("RSA PRIVATE KEY" label) for on-disk
    /// persistence of the leaf key.
    pub fn pkcs1_pem(&self) -> Result<String> {
        Ok(self
            .private
            .to_pkcs1_pem(LineEnding::LF)
            .context("encode RSA key as PKCS#1 PEM")?
            .to_string())
    }
}
