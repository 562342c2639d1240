use thiserror::Error;

/// Error type for JWT operations.
///
/// Verification failures are deliberately distinct (`TokenExpired`,
/// `InvalidSignature`, `Malformed`) so callers can log the real cause;
/// the HTTP boundary collapses all of them into one generic response.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}
