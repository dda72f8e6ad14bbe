use std::sync::Arc;

use http::header::AUTHORIZATION;
use http::HeaderMap;

use crate::errors::ApiError;
use crate::jwt::Claims;
use crate::jwt::TokenService;

const BEARER_SCHEME: &str = "Bearer";

/// Per-request authentication check.
///
/// Turns the `Authorization` header into verified claims or a rejection. Holds
/// nothing but the token service, so one gate serves every request.
#[derive(Clone)]
pub struct AuthGate {
    tokens: Arc<TokenService>,
}

impl AuthGate {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    /// Authenticate a request from its headers.
    ///
    /// # Errors
    /// * `MissingToken` - No `Authorization` header, or an empty one
    /// * `InvalidTokenFormat` - Header is not `Bearer <token>`
    /// * `InvalidToken` - Token failed verification, whatever the reason
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Claims, ApiError> {
        let token = bearer_token(headers)?;

        self.tokens.verify(token).map_err(|e| {
            tracing::warn!(error = %e, "Token verification failed");
            ApiError::invalid_token()
        })
    }
}

/// Extract the token part of a `Bearer <token>` authorization header.
///
/// The header must split on single spaces into exactly two parts, the first
/// being `Bearer`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(ApiError::missing_token()),
    };

    let value = value.to_str().map_err(|_| {
        tracing::debug!("Authorization header is not valid UTF-8");
        ApiError::invalid_token_format()
    })?;

    match value.split(' ').collect::<Vec<_>>().as_slice() {
        [scheme, token] if *scheme == BEARER_SCHEME => Ok(*token),
        _ => {
            tracing::debug!("Malformed Authorization header");
            Err(ApiError::invalid_token_format())
        }
    }
}
