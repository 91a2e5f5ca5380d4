//! Common test utilities for integration tests
//!
//! Each `TestApp` owns a fresh in-memory SQLite database with migrations
//! applied, so tests never share state.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use product_catalog_backend::{
    auth::PasswordService, config::AppConfig, db, repositories::SellerRepository, routes,
    state::AppState,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const ADMIN_PASSWORD: &str = "secret123";

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application backed by an in-memory database
    pub async fn new() -> Self {
        let pool = db::create_memory_pool()
            .await
            .expect("Failed to create in-memory database");

        let state = AppState::new(pool.clone(), test_config());
        let app = routes::create_router(state.clone());

        Self { app, pool, state }
    }

    /// Insert a seller directly, returning its id
    pub async fn seed_seller(&self, username: &str, password: &str) -> i64 {
        let hash = PasswordService::hash(password).expect("Failed to hash password");
        SellerRepository::create(&self.pool, username, &format!("{username}@example.com"), &hash)
            .await
            .expect("Failed to insert seller")
            .id
    }

    /// Log in through `POST /login` and return the access token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let form = format!("username={username}&password={password}");
        let (status, body) = self.post_form("/login", &form).await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");

        let body: Value = serde_json::from_str(&body).unwrap();
        body["access_token"].as_str().unwrap().to_string()
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Make a request with a JSON body
    pub async fn send_json(&self, method: &str, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Make a POST request with a JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.send_json("POST", path, body).await
    }

    /// Make a POST request with a form-encoded body
    pub async fn post_form(&self, path: &str, form: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Make a DELETE request, optionally with a bearer token
    pub async fn delete(&self, path: &str, token: Option<&str>) -> (StatusCode, String) {
        let mut builder = Request::builder().method("DELETE").uri(path);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.port = 0;
    config.database.url = "sqlite::memory:".to_string();
    config.jwt.secret = "test-secret-key-for-testing-only-32chars".to_string();
    config
}
