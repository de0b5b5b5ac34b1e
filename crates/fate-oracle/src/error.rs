//! Error types for oracle calls.

use thiserror::Error;

/// Alias for `Result<T, OracleError>`.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can occur when consulting the oracle.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The HTTP request failed (network, TLS, quota, non-2xx status).
    #[error("oracle request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a body the client could not use.
    #[error("malformed oracle response: {0}")]
    MalformedResponse(String),
}
