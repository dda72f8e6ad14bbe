use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated identity in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub claims: auth::Claims,
}

/// Middleware that runs the authentication gate and publishes the verified
/// user into request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = state.gate.authenticate(req.headers())?;

    let user_id = claims.subject::<UserId>().ok_or_else(|| {
        tracing::warn!(subject = %claims.sub, "Token subject is not a user id");
        auth::ApiError::invalid_token()
    })?;

    req.extensions_mut()
        .insert(AuthenticatedUser { user_id, claims });

    Ok(next.run(req).await)
}
