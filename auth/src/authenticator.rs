use std::sync::Arc;

use crate::errors::ApiError;
use crate::errors::Violation;
use crate::gate::AuthGate;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::TokenService;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::password::PasswordPolicy;

/// Authentication coordinator combining password policy, password hashing and
/// token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    password_policy: PasswordPolicy,
    tokens: Arc<TokenService>,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// Signed identity token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl From<AuthenticationError> for ApiError {
    fn from(err: AuthenticationError) -> Self {
        match err {
            AuthenticationError::InvalidCredentials => ApiError::invalid_credentials(),
            AuthenticationError::PasswordError(e) => e.into(),
            AuthenticationError::JwtError(e) => e.into(),
        }
    }
}

impl Authenticator {
    /// Create an authenticator with the default password policy.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self::with_token_service(Arc::new(TokenService::new(jwt_secret)))
    }

    /// Create an authenticator around an existing token service.
    pub fn with_token_service(tokens: Arc<TokenService>) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            password_policy: PasswordPolicy::default(),
            tokens,
        }
    }

    pub fn with_password_policy(mut self, password_policy: PasswordPolicy) -> Self {
        self.password_policy = password_policy;
        self
    }

    /// Gate sharing this authenticator's token service.
    pub fn gate(&self) -> AuthGate {
        AuthGate::new(Arc::clone(&self.tokens))
    }

    /// Check a new password against the password policy.
    ///
    /// # Returns
    /// Every broken rule; empty when the password is acceptable
    pub fn password_violations(&self, password: &str) -> Vec<Violation> {
        self.password_policy.validate(password)
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for `subject`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be checked
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: impl ToString,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.tokens.issue(subject)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token without password verification, e.g. right after registration.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn generate_token(&self, subject: impl ToString) -> Result<String, JwtError> {
        self.tokens.issue(subject)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    /// * `JwtError` - Token is invalid or expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.tokens.verify(token)
    }
}
