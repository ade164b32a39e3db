//! Common error types for sleeve

use thiserror::Error;

/// Common result type for sleeve operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy shared by the catalog pipelines.
///
/// Transport errors are carried as strings so this crate stays independent
/// of any particular HTTP client.
#[derive(Error, Debug)]
pub enum Error {
    /// Network-level failure (connect, DNS, body read)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Remote service answered with a non-success status
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// A call exceeded its per-attempt timeout
    #[error("Timed out: {0}")]
    Timeout(String),

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Client construction or configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
