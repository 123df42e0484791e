use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use pkg_constants::{cluster, paths};
use pkg_pki::{CertificateAuthority, PkiConfig};
use tracing::info;

#[derive(Parser)]
#[command(name = "rudder", about = "rudder cluster bootstrap utility")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage bootstrap PKI material
    Pki {
        #[command(subcommand)]
        action: PkiAction,
    },
    /// Generate ancillary secrets
    Secret {
        #[command(subcommand)]
        action: SecretAction,
    },
}

#[derive(Subcommand)]
enum PkiAction {
    /// Create an ephemeral CA and a server certificate for a host,
    /// then install them as the cluster TLS secret
    Generate {
        /// Host name or IP address the server certificate is issued for
        #[arg(long)]
        host: String,

        /// Override the certificate output directory
        #[arg(long)]
        cert_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum SecretAction {
    /// Print a random credential string
    Random {
        /// Number of characters
        #[arg(long, default_value_t = 32)]
        length: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Pki {
            action: PkiAction::Generate { host, cert_dir },
        } => generate_pki(&host, cert_dir.as_deref()),
        Commands::Secret {
            action: SecretAction::Random { length },
        } => {
            println!("{}", pkg_pki::random_string(length)?);
            Ok(())
        }
    }
}

/// Full PKI bootstrap: fresh CA, host certificate signed by it, secret
/// handoff to the cluster. Every run produces new key material; nothing
/// is cached across runs. Any failure aborts the whole bootstrap.
fn generate_pki(host: &str, cert_dir_override: Option<&Path>) -> Result<()> {
    let directory = match cert_dir_override {
        Some(dir) => dir.to_path_buf(),
        None => default_certs_dir()?,
    };
    create_certs_dir(&directory)?;

    let config = PkiConfig::default();
    let ca_file = directory.join(paths::CA_CERT_FILE);
    let ca = CertificateAuthority::create(&ca_file, &config).context("CA creation failed")?;

    let cert_file = directory.join(paths::SERVER_CERT_FILE);
    let key_file = directory.join(paths::SERVER_KEY_FILE);
    ca.issue_server_cert(host, &cert_file, &key_file, &config)
        .context("server certificate issuance failed")?;

    install_tls_secret(&cert_file, &key_file).context("cluster TLS secret installation failed")?;

    println!("Ephemeral CA below and saved to {}\n", ca_file.display());
    println!("{}", ca.cert_pem());
    Ok(())
}

fn default_certs_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot resolve home directory for certificate storage")?;
    Ok(home.join(paths::DATA_SUBDIR).join(paths::CERTS_SUBDIR))
}

/// Create the certs directory, owner-only.
fn create_certs_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("create certificate directory {}", dir.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(dir, fs::Permissions::from_mode(paths::CERT_DIR_MODE))
            .with_context(|| format!("set permissions on {}", dir.display()))?;
    }

    Ok(())
}

/// Replace the cluster TLS secret with the freshly generated keypair.
fn install_tls_secret(cert_file: &Path, key_file: &Path) -> Result<()> {
    info!(
        "Installing TLS secret {}/{}",
        cluster::TLS_SECRET_NAMESPACE,
        cluster::TLS_SECRET_NAME
    );

    run_kubectl(&[
        "-n",
        cluster::TLS_SECRET_NAMESPACE,
        "delete",
        "secret",
        cluster::TLS_SECRET_NAME,
        "--ignore-not-found",
    ])?;

    let cert_arg = format!("--cert={}", cert_file.display());
    let key_arg = format!("--key={}", key_file.display());
    run_kubectl(&[
        "-n",
        cluster::TLS_SECRET_NAMESPACE,
        "create",
        "secret",
        "tls",
        cluster::TLS_SECRET_NAME,
        &cert_arg,
        &key_arg,
    ])
}

fn run_kubectl(args: &[&str]) -> Result<()> {
    let output = Command::new(cluster::KUBECTL_BIN)
        .args(args)
        .output()
        .with_context(|| format!("run {} {}", cluster::KUBECTL_BIN, args.join(" ")))?;

    if !output.status.success() {
        bail!(
            "{} {} failed: {}",
            cluster::KUBECTL_BIN,
            args.join(" "),
            command_failure_summary(&output)
        );
    }

    Ok(())
}

fn command_failure_summary(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !stderr.is_empty() {
        return stderr;
    }
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if !stdout.is_empty() {
        return stdout;
    }
    match output.status.code() {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn failure_summary_prefers_stderr() {
        let output = Command::new("sh")
            .arg("-c")
            .arg("echo out; echo err 1>&2; exit 3")
            .output()
            .expect("run sh");
        assert_eq!(command_failure_summary(&output), "err");
    }

    #[cfg(unix)]
    #[test]
    fn failure_summary_falls_back_to_exit_code() {
        let output = Command::new("sh")
            .arg("-c")
            .arg("exit 7")
            .output()
            .expect("run sh");
        assert_eq!(command_failure_summary(&output), "exit code 7");
    }

    #[cfg(unix)]
    #[test]
    fn certs_dir_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = std::env::temp_dir().join(format!(
            "rudder-certs-test-{}",
            std::process::id()
        ));
        create_certs_dir(&dir).expect("create certs dir");

        let mode = fs::metadata(&dir)
            .expect("dir metadata")
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(mode, 0o700);

        fs::remove_dir_all(&dir).expect("cleanup");
    }
}
