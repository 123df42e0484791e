//! Ephemeral PKI for cluster bootstrap.
//!
//! Creates a throwaway certificate authority and issues a short-lived,
//! host-bound server certificate signed by it, entirely offline — no
//! ACME, no enterprise CA. Also provides random credential strings for
//! ancillary secrets.
//!
//! The CA private key only ever lives in memory; the single key this
//! crate persists is the server leaf key, owner-only on disk.

pub mod ca;
pub mod config;
pub mod keys;
pub mod secrets;

pub use ca::CertificateAuthority;
pub use config::PkiConfig;
pub use secrets::random_string;
