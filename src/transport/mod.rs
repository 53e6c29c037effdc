//! Transport layer for the gRPC server.
//!
//! Supports:
//! - TCP: Standard network transport (default)
//! - UDS: Unix Domain Sockets for local IPC

use std::future::Future;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tokio::net::UnixListener;
use tokio_stream::wrappers::UnixListenerStream;
use tonic::transport::server::Router;
use tracing::info;

/// Transport type discriminator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    /// TCP transport (network).
    #[default]
    Tcp,
    /// Unix Domain Socket transport (local IPC).
    Uds,
}

/// Transport configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Transport type discriminator.
    #[serde(rename = "type")]
    pub transport_type: TransportType,
    /// TCP-specific configuration.
    pub tcp: TcpConfig,
    /// UDS-specific configuration.
    pub uds: UdsConfig,
}

/// TCP transport configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TcpConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
}

impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 50052,
        }
    }
}

impl TcpConfig {
    /// Get the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// UDS transport configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UdsConfig {
    /// Base path for socket files.
    pub base_path: PathBuf,
}

impl Default for UdsConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("/tmp/cart-service"),
        }
    }
}

impl UdsConfig {
    /// Get the socket path for a service.
    pub fn socket_path(&self, service_name: &str) -> PathBuf {
        self.base_path.join(format!("{}.sock", service_name))
    }
}

/// RAII guard for cleaning up UDS socket files.
pub struct UdsCleanupGuard {
    path: PathBuf,
}

impl Drop for UdsCleanupGuard {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to clean up UDS socket"
                );
            }
        }
    }
}

/// Prepare a UDS socket path for binding.
///
/// Creates parent directories, removes a stale socket file if present,
/// and returns a guard that removes the socket on drop.
fn prepare_uds_socket(path: &Path) -> std::io::Result<UdsCleanupGuard> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if path.exists() {
        info!(path = %path.display(), "Removing stale UDS socket");
        std::fs::remove_file(path)?;
    }

    Ok(UdsCleanupGuard {
        path: path.to_path_buf(),
    })
}

/// Serve a gRPC router using the configured transport.
///
/// The server shuts down gracefully when the signal future completes.
pub async fn serve_with_shutdown<F>(
    router: Router,
    config: &TransportConfig,
    service_name: &str,
    signal: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: Future<Output = ()> + Send,
{
    match config.transport_type {
        TransportType::Tcp => {
            let addr: SocketAddr = config.tcp.addr().parse()?;
            info!(
                service = %service_name,
                address = %addr,
                transport = "tcp",
                "Server listening"
            );
            router.serve_with_shutdown(addr, signal).await?;
        }
        TransportType::Uds => {
            let socket_path = config.uds.socket_path(service_name);
            let _guard = prepare_uds_socket(&socket_path)?;

            let uds = UnixListener::bind(&socket_path)?;
            let stream = UnixListenerStream::new(uds);

            info!(
                service = %service_name,
                path = %socket_path.display(),
                transport = "uds",
                "Server listening"
            );

            router.serve_with_incoming_shutdown(stream, signal).await?;
        }
    }

    Ok(())
}
