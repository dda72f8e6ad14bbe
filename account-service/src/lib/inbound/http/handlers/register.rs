use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::required_field;
use super::ApiError;
use super::ApiSuccess;
use super::SessionResponseData;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiSuccess<SessionResponseData>, ApiError> {
    let Json(body) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Rejected register request body");
        auth::ApiError::invalid_request_format()
    })?;

    state
        .user_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|session| ApiSuccess::new(StatusCode::CREATED, session.into()))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    email: Option<String>,
    password: Option<String>,
    name: Option<String>,
    surname: Option<String>,
}

impl RegisterRequest {
    /// Required fields first, then email format.
    fn try_into_command(self) -> Result<RegisterCommand, auth::ApiError> {
        let email = required_field(self.email, "email")?;
        let password = required_field(self.password, "password")?;
        let email = EmailAddress::new(email).map_err(|_| auth::ApiError::invalid_email())?;

        Ok(RegisterCommand::new(email, password, self.name, self.surname))
    }
}

#[cfg(test)]
mod tests {
    use auth::ErrorCode;

    use super::*;

    fn request(email: Option<&str>, password: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            email: email.map(str::to_string),
            password: password.map(str::to_string),
            name: None,
            surname: None,
        }
    }

    #[test]
    fn test_missing_email_wins_over_missing_password() {
        let err = request(None, None).try_into_command().unwrap_err();
        assert_eq!(err.code(), ErrorCode::MissingRequiredField);
        assert_eq!(
            serde_json::to_value(&err).unwrap()["details"]["field"],
            "email"
        );
    }

    #[test]
    fn test_missing_password_wins_over_bad_email() {
        let err = request(Some("not-an-email"), Some(""))
            .try_into_command()
            .unwrap_err();
        assert_eq!(
            serde_json::to_value(&err).unwrap()["details"]["field"],
            "password"
        );
    }

    #[test]
    fn test_invalid_email() {
        let err = request(Some("not-an-email"), Some("weakpass"))
            .try_into_command()
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidEmail);
    }

    #[test]
    fn test_valid_request() {
        let command = request(Some("Alice@Example.com"), Some("Str0ng!Pass"))
            .try_into_command()
            .unwrap();
        assert_eq!(command.email.as_str(), "alice@example.com");
        assert_eq!(command.password, "Str0ng!Pass");
    }
}
