use thiserror::Error;

use crate::errors::ApiError;

/// Error type for token operations.
///
/// Verification failures keep their reason for logging only: every one of
/// them becomes the same `InvalidToken` API error.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid: {0}")]
    InvalidToken(String),

    #[error("Token is expired")]
    Expired,
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::EncodingFailed(_) => ApiError::internal(err),
            JwtError::InvalidToken(_) | JwtError::Expired => ApiError::invalid_token(),
        }
    }
}
