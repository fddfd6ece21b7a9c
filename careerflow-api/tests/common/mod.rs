/// Common test utilities for integration tests
///
/// - Database connection and migrations (`DATABASE_URL`, `JWT_SECRET`)
/// - A registered user with an access token
/// - Request helpers over the in-process router

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use careerflow_api::app::{build_router, AppState};
use careerflow_api::config::Config;
use careerflow_shared::db::migrations::run_migrations;
use careerflow_shared::models::user::User;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::Service as _;
use uuid::Uuid;

pub const PASSWORD: &str = "S3cure!pass";

/// A registered user as seen by the API
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub token: String,
    pub refresh_token: String,
}

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
    pub user: TestUser,
}

/// Raw response parts
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl TestContext {
    /// Connects, migrates and registers a fresh user
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;

        let db = PgPool::connect(&config.database.url).await?;
        run_migrations(&db).await?;

        let app = build_router(AppState::new(db.clone(), config));

        let mut ctx = TestContext {
            db,
            app,
            user: TestUser {
                id: Uuid::nil(),
                email: String::new(),
                token: String::new(),
                refresh_token: String::new(),
            },
        };
        ctx.user = ctx.register("Test User").await?;

        Ok(ctx)
    }

    /// Registers another user through the API
    pub async fn register(&self, name: &str) -> anyhow::Result<TestUser> {
        let email = format!("test-{}@example.com", Uuid::new_v4());
        let response = self
            .send(
                "POST",
                "/v1/auth/register",
                None,
                Some(json!({
                    "name": name,
                    "email": email,
                    "password": PASSWORD,
                    "city": "Recife",
                    "state": "pe"
                })),
            )
            .await;

        anyhow::ensure!(
            response.status == StatusCode::CREATED,
            "register failed with {}: {}",
            response.status,
            response.text()
        );

        let body = response.json();
        Ok(TestUser {
            id: body["user"]["id"].as_str().unwrap_or_default().parse()?,
            email,
            token: body["access_token"].as_str().unwrap_or_default().to_string(),
            refresh_token: body["refresh_token"].as_str().unwrap_or_default().to_string(),
        })
    }

    /// Sends a request, optionally authenticated and with a JSON body
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .call(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Sends as the context's own user
    pub async fn send_as_user(&self, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
        self.send(method, uri, Some(&self.user.token), body).await
    }

    /// Deletes the context's user; profile records cascade
    pub async fn cleanup(&self) -> anyhow::Result<()> {
        User::delete(&self.db, self.user.id).await?;
        Ok(())
    }
}
