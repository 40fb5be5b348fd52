//! Error types for pentrack-server startup.

use thiserror::Error;

/// Result type alias for pentrack-server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while bringing the server up. Request-level
/// failures never surface here; they are answered with `ApiError` bodies.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Startup configuration violated the config contract.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The bind address could not be parsed.
    #[error("invalid bind address {addr}: {source}")]
    BindAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Socket or serve failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
