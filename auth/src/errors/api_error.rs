use std::fmt::Display;

use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use super::code::ErrorCategory;
use super::code::ErrorCode;

/// Field-level diagnostic, e.g. one broken password rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Structured payload attached to an [`ApiError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorDetails {
    /// Every violation found, in rule order.
    Violations(Vec<Violation>),
    /// The single offending field.
    Field(Violation),
    /// Opaque diagnostic text; never meant to be acted upon by clients.
    Cause(String),
}

/// Error value shared by every authentication component.
///
/// Serializes to `{code, message, details?}`. The transport status is derived
/// from the code and is not part of the serialized body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message} ({code})")]
pub struct ApiError {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<ErrorDetails>,
}

impl ApiError {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    fn with_details(mut self, details: ErrorDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials, "Invalid email or password")
    }

    pub fn token_expired() -> Self {
        Self::new(ErrorCode::TokenExpired, "Token has expired")
    }

    pub fn invalid_token() -> Self {
        Self::new(ErrorCode::InvalidToken, "Invalid token")
    }

    pub fn missing_token() -> Self {
        Self::new(ErrorCode::MissingToken, "Authorization token is missing")
    }

    pub fn invalid_token_format() -> Self {
        Self::new(ErrorCode::InvalidTokenFormat, "Invalid token format")
    }

    pub fn invalid_email() -> Self {
        Self::new(ErrorCode::InvalidEmail, "Invalid email format")
    }

    pub fn invalid_password(violations: Vec<Violation>) -> Self {
        Self::new(
            ErrorCode::InvalidPassword,
            "Password does not meet security requirements",
        )
        .with_details(ErrorDetails::Violations(violations))
    }

    pub fn email_already_exists() -> Self {
        Self::new(ErrorCode::EmailAlreadyExists, "Email is already registered")
    }

    pub fn invalid_request_format() -> Self {
        Self::new(ErrorCode::InvalidRequestFormat, "Invalid request format")
    }

    pub fn missing_required_field(field: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, "Required field is missing")
            .with_details(ErrorDetails::Field(Violation::new(
                field,
                "This field is required",
            )))
    }

    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidField, "Invalid field value")
            .with_details(ErrorDetails::Field(Violation::new(field, message)))
    }

    pub fn database(cause: impl Display) -> Self {
        Self::new(ErrorCode::DatabaseError, "Database operation failed")
            .with_details(ErrorDetails::Cause(cause.to_string()))
    }

    pub fn record_not_found(resource: &str) -> Self {
        Self::new(ErrorCode::RecordNotFound, format!("{} not found", resource))
    }

    pub fn duplicate_entry() -> Self {
        Self::new(ErrorCode::DuplicateEntry, "Record already exists")
    }

    pub fn internal(cause: impl Display) -> Self {
        Self::new(ErrorCode::InternalServer, "Internal server error")
            .with_details(ErrorDetails::Cause(cause.to_string()))
    }

    pub fn service_unavailable() -> Self {
        Self::new(
            ErrorCode::ServiceUnavailable,
            "Service is temporarily unavailable",
        )
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&ErrorDetails> {
        self.details.as_ref()
    }

    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}
