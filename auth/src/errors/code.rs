use std::fmt;

use http::StatusCode;
use serde::Serialize;
use serde::Serializer;

/// Family an [`ErrorCode`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Authentication,
    Validation,
    Resource,
    Persistence,
    Internal,
}

/// Stable machine identifier of an API error.
///
/// The code alone determines the category and the transport status, so the
/// HTTP layer maps errors with a direct lookup and never inspects messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication (1xxx)
    InvalidCredentials,
    TokenExpired,
    InvalidToken,
    MissingToken,
    InvalidTokenFormat,

    // Validation (2xxx)
    InvalidEmail,
    InvalidPassword,
    EmailAlreadyExists,
    InvalidRequestFormat,
    MissingRequiredField,
    InvalidField,

    // Persistence and resources (3xxx)
    DatabaseError,
    RecordNotFound,
    DuplicateEntry,

    // Server (5xxx)
    InternalServer,
    ServiceUnavailable,
}

impl ErrorCode {
    /// Every code, in wire order.
    pub const ALL: [ErrorCode; 16] = [
        ErrorCode::InvalidCredentials,
        ErrorCode::TokenExpired,
        ErrorCode::InvalidToken,
        ErrorCode::MissingToken,
        ErrorCode::InvalidTokenFormat,
        ErrorCode::InvalidEmail,
        ErrorCode::InvalidPassword,
        ErrorCode::EmailAlreadyExists,
        ErrorCode::InvalidRequestFormat,
        ErrorCode::MissingRequiredField,
        ErrorCode::InvalidField,
        ErrorCode::DatabaseError,
        ErrorCode::RecordNotFound,
        ErrorCode::DuplicateEntry,
        ErrorCode::InternalServer,
        ErrorCode::ServiceUnavailable,
    ];

    /// Wire representation, e.g. `ERR_1003`.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidCredentials => "ERR_1001",
            ErrorCode::TokenExpired => "ERR_1002",
            ErrorCode::InvalidToken => "ERR_1003",
            ErrorCode::MissingToken => "ERR_1004",
            ErrorCode::InvalidTokenFormat => "ERR_1005",
            ErrorCode::InvalidEmail => "ERR_2001",
            ErrorCode::InvalidPassword => "ERR_2002",
            ErrorCode::EmailAlreadyExists => "ERR_2003",
            ErrorCode::InvalidRequestFormat => "ERR_2004",
            ErrorCode::MissingRequiredField => "ERR_2005",
            ErrorCode::InvalidField => "ERR_2006",
            ErrorCode::DatabaseError => "ERR_3001",
            ErrorCode::RecordNotFound => "ERR_3002",
            ErrorCode::DuplicateEntry => "ERR_3003",
            ErrorCode::InternalServer => "ERR_5001",
            ErrorCode::ServiceUnavailable => "ERR_5002",
        }
    }

    pub fn category(self) -> ErrorCategory {
        match self {
            ErrorCode::InvalidCredentials
            | ErrorCode::TokenExpired
            | ErrorCode::InvalidToken
            | ErrorCode::MissingToken
            | ErrorCode::InvalidTokenFormat => ErrorCategory::Authentication,
            ErrorCode::InvalidEmail
            | ErrorCode::InvalidPassword
            | ErrorCode::EmailAlreadyExists
            | ErrorCode::InvalidRequestFormat
            | ErrorCode::MissingRequiredField
            | ErrorCode::InvalidField => ErrorCategory::Validation,
            ErrorCode::RecordNotFound | ErrorCode::DuplicateEntry => ErrorCategory::Resource,
            ErrorCode::DatabaseError => ErrorCategory::Persistence,
            ErrorCode::InternalServer | ErrorCode::ServiceUnavailable => ErrorCategory::Internal,
        }
    }

    /// Transport status for this code.
    pub fn status(self) -> StatusCode {
        match self.category() {
            ErrorCategory::Authentication => StatusCode::UNAUTHORIZED,
            ErrorCategory::Validation => StatusCode::BAD_REQUEST,
            ErrorCategory::Resource => match self {
                ErrorCode::DuplicateEntry => StatusCode::CONFLICT,
                _ => StatusCode::NOT_FOUND,
            },
            ErrorCategory::Persistence => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCategory::Internal => match self {
                ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<&str> = ErrorCode::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(codes.len(), ErrorCode::ALL.len());
    }

    #[test]
    fn test_code_prefix_matches_category() {
        for code in ErrorCode::ALL {
            let prefix = &code.as_str()[..5];
            let expected = match code.category() {
                ErrorCategory::Authentication => "ERR_1",
                ErrorCategory::Validation => "ERR_2",
                ErrorCategory::Resource | ErrorCategory::Persistence => "ERR_3",
                ErrorCategory::Internal => "ERR_5",
            };
            assert_eq!(prefix, expected, "unexpected prefix for {}", code);
        }
    }

    #[test]
    fn test_category_statuses() {
        for code in ErrorCode::ALL {
            let status = code.status();
            match code.category() {
                ErrorCategory::Authentication => assert_eq!(status, StatusCode::UNAUTHORIZED),
                ErrorCategory::Validation => assert_eq!(status, StatusCode::BAD_REQUEST),
                ErrorCategory::Resource => assert!(
                    status == StatusCode::NOT_FOUND || status == StatusCode::CONFLICT
                ),
                ErrorCategory::Persistence | ErrorCategory::Internal => {
                    assert!(status.is_server_error())
                }
            }
        }
    }

    #[test]
    fn test_resource_statuses() {
        assert_eq!(ErrorCode::RecordNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::DuplicateEntry.status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::ServiceUnavailable.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_serializes_as_wire_code() {
        let json = serde_json::to_string(&ErrorCode::MissingToken).unwrap();
        assert_eq!(json, "\"ERR_1004\"");
    }
}
