use std::sync::Arc;

use auth::AuthGate;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::DefaultMakeSpan;
use tower_http::trace::DefaultOnResponse;
use tower_http::trace::TraceLayer;
use tracing::Level;

use super::handlers::login::login;
use super::handlers::me::me;
use super::handlers::register::register;
use super::middleware::authenticate;
use crate::domain::user::ports::UserServicePort;

/// Shared handler state: the account service and the request gate.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub gate: AuthGate,
}

/// Build the account API.
///
/// `/register` and `/login` are public; `/me` sits behind the
/// authentication middleware.
pub fn create_router(user_service: Arc<dyn UserServicePort>, gate: AuthGate) -> Router {
    let state = AppState { user_service, gate };

    let gated = Router::new()
        .route("/me", get(me))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    // Headers are left out of spans so bearer tokens never reach the logs.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(gated)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
