//! Cluster handoff constants.

/// Cluster client binary used to install the generated TLS secret.
pub const KUBECTL_BIN: &str = "kubectl";

/// Namespace the TLS secret is installed into.
pub const TLS_SECRET_NAMESPACE: &str = "kube-system";

/// Name of the TLS secret resource.
pub const TLS_SECRET_NAME: &str = "tls-pem";
