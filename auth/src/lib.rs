//! Stateless authentication core
//!
//! Provides the pieces an HTTP service needs to authenticate users without a
//! session store:
//! - A structured error taxonomy (`ApiError`) with stable codes
//! - Password policy enforcement with per-rule diagnostics
//! - Password hashing (Argon2id)
//! - Signed, time-bounded identity tokens (HS256)
//! - A request gate turning an `Authorization` header into verified claims
//!
//! # Examples
//!
//! ## Password Policy
//! ```
//! use auth::validate_password;
//!
//! assert!(validate_password("Str0ng!Pass").is_empty());
//! assert_eq!(validate_password("weakpass").len(), 3);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenService;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!");
//! let token = tokens.issue(42).unwrap();
//! let claims = tokens.verify(&token).unwrap();
//! assert_eq!(claims.subject::<u64>(), Some(42));
//! ```
//!
//! ## Request Gate
//! ```
//! use auth::{Authenticator, ErrorCode};
//! use http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//! let gate = auth.gate();
//!
//! let mut headers = HeaderMap::new();
//! assert_eq!(gate.authenticate(&headers).unwrap_err().code(), ErrorCode::MissingToken);
//!
//! let token = auth.generate_token(42).unwrap();
//! let value = HeaderValue::from_str(&format!("Bearer {}", token)).unwrap();
//! headers.insert(AUTHORIZATION, value);
//! assert_eq!(gate.authenticate(&headers).unwrap().sub, "42");
//! ```

pub mod authenticator;
pub mod clock;
pub mod errors;
pub mod gate;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use clock::Clock;
pub use clock::FixedClock;
pub use clock::SystemClock;
pub use errors::ApiError;
pub use errors::ErrorCategory;
pub use errors::ErrorCode;
pub use errors::ErrorDetails;
pub use errors::Violation;
pub use gate::AuthGate;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenService;
pub use password::validate_password;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordPolicy;
pub use password::PasswordRule;
