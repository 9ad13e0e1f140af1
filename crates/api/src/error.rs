//! Error types for configuration loading and server startup.

use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` is not a valid `u16`.
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// `LOG_FORMAT` is neither `pretty` nor `json`.
    #[error("invalid LOG_FORMAT {0:?}: expected \"pretty\" or \"json\"")]
    InvalidLogFormat(String),

    /// A boolean flag holds something other than `true`/`false`/`1`/`0`.
    #[error("invalid {var} {value:?}: expected a boolean")]
    InvalidBool { var: &'static str, value: String },
}

/// Errors that stop the server from starting or keep it from running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The Prometheus recorder could not be installed.
    #[error("failed to install metrics recorder: {0}")]
    Metrics(String),

    /// The accept loop terminated with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// Result type for server startup.
pub type Result<T> = std::result::Result<T, ServerError>;
