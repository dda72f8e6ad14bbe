use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::user::models::Session;
use crate::user::errors::UserError;

pub mod login;
pub mod me;
pub mod register;

/// Successful response: status plus the payload as the JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// HTTP face of [`auth::ApiError`]: status from the error code, body
/// `{code, message, details?}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError(pub auth::ApiError);

impl From<auth::ApiError> for ApiError {
    fn from(err: auth::ApiError) -> Self {
        Self(err)
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0.status(), Json(self.0)).into_response()
    }
}

/// Response payload of register and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResponseData {
    pub token: String,
    pub user: SessionUserData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUserData {
    pub id: i64,
    pub email: String,
    pub name: String,
}

impl From<Session> for SessionResponseData {
    fn from(session: Session) -> Self {
        Self {
            token: session.token,
            user: SessionUserData {
                id: session.user.id.0,
                email: session.user.email.as_str().to_string(),
                name: session.user.name,
            },
        }
    }
}

/// Raw required field: absent and empty are both missing.
fn required_field(value: Option<String>, field: &'static str) -> Result<String, auth::ApiError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| auth::ApiError::missing_required_field(field))
}

#[cfg(test)]
mod tests {
    use auth::ErrorCode;

    use super::*;

    #[test]
    fn test_required_field() {
        assert_eq!(
            required_field(Some("a@b.c".to_string()), "email").unwrap(),
            "a@b.c"
        );
        assert_eq!(
            required_field(None, "email").unwrap_err().code(),
            ErrorCode::MissingRequiredField
        );
        assert_eq!(
            required_field(Some(String::new()), "password")
                .unwrap_err()
                .code(),
            ErrorCode::MissingRequiredField
        );
    }

    #[test]
    fn test_error_response_status() {
        let response = ApiError(auth::ApiError::missing_token()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = ApiError::from(UserError::EmailAlreadyExists("a@b.c".to_string()))
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
