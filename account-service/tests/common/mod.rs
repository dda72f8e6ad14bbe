use std::sync::Arc;
use std::sync::Mutex;

use account_service::domain::user::models::NewUser;
use account_service::domain::user::models::User;
use account_service::domain::user::models::UserId;
use account_service::domain::user::ports::UserRepository;
use account_service::domain::user::service::UserService;
use account_service::inbound::http::router::create_router;
use account_service::user::errors::UserError;
use async_trait::async_trait;
use auth::Authenticator;
use axum::body::Body;
use axum::http::header::AUTHORIZATION;
use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Repository keeping users in memory, assigning sequential ids from 1
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        let created = User {
            id: UserId(users.len() as i64 + 1),
            email: user.email,
            password_hash: user.password_hash,
            name: user.name,
            surname: user.surname,
            created_at: Utc::now(),
        };
        users.push(created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email.as_str() == email).cloned())
    }
}

/// Test application driving the router in-process
pub struct TestApp {
    pub router: Router,
    pub authenticator: Arc<Authenticator>,
}

/// Response status and parsed JSON body
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    pub fn spawn() -> Self {
        let authenticator = Arc::new(Authenticator::new(JWT_SECRET));
        let repository = Arc::new(InMemoryUserRepository::default());
        let user_service = Arc::new(UserService::new(repository, Arc::clone(&authenticator)));

        let router = create_router(user_service, authenticator.gate());

        Self {
            router,
            authenticator,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        authorization: Option<&str>,
        body: Option<String>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body)),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Failed to parse response")
        };

        TestResponse { status, body }
    }

    pub async fn post_json(&self, path: &str, body: Value) -> TestResponse {
        self.request(Method::POST, path, None, Some(body.to_string()))
            .await
    }

    pub async fn get_with_authorization(&self, path: &str, authorization: &str) -> TestResponse {
        self.request(Method::GET, path, Some(authorization), None)
            .await
    }

    /// Register a user and return the issued token
    pub async fn register(&self, email: &str, password: &str) -> String {
        let response = self
            .post_json(
                "/register",
                serde_json::json!({
                    "email": email,
                    "password": password,
                    "name": "Nicola",
                    "surname": "Rossi"
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);

        response.body["token"]
            .as_str()
            .expect("Missing token")
            .to_string()
    }
}
