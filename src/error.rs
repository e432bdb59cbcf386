//! Top-level startup errors for the host binary.

use std::net::SocketAddr;

use crate::config::ConfigError;

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// Environment configuration is malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The Leptos `[workspace.metadata.leptos]` settings could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The listening socket could not be opened.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop terminated with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
