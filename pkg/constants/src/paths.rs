//! Filesystem path constants.

// ─── Asset storage ────────────────────────────────────────────────────────

/// Per-user data directory, resolved relative to `$HOME`.
pub const DATA_SUBDIR: &str = ".rudder";

/// Subdirectory of the data directory holding certificate artifacts.
pub const CERTS_SUBDIR: &str = "certs";

// ─── Certificate artifacts ────────────────────────────────────────────────

/// File name of the CA public certificate inside the certs directory.
pub const CA_CERT_FILE: &str = "ca.pem";

/// File name of the host server certificate inside the certs directory.
pub const SERVER_CERT_FILE: &str = "server.crt";

/// File name of the host server private key inside the certs directory.
pub const SERVER_KEY_FILE: &str = "server.key";

// ─── Permissions ──────────────────────────────────────────────────────────

/// Mode for the certs directory: owner only.
pub const CERT_DIR_MODE: u32 = 0o700;

/// Mode for the persisted server private key: owner read/write only.
pub const KEY_FILE_MODE: u32 = 0o600;
