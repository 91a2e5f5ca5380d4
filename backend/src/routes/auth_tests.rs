//! Property-based tests for authentication
//!
//! Every request to the admin-only delete route without a valid bearer
//! token must be rejected with 401, whatever the header looks like.

#[cfg(test)]
mod tests {
    use crate::auth::{PasswordService, TokenService};
    use crate::config::AppConfig;
    use crate::db;
    use crate::repositories::SellerRepository;
    use crate::routes::create_router;
    use crate::state::AppState;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::{Duration, Utc};
    use proptest::prelude::*;
    use tower::ServiceExt;

    const DELETE_URI: &str = "/api/v1/products/deleteProduct/1";

    async fn create_test_state() -> AppState {
        let pool = db::create_memory_pool().await.unwrap();
        AppState::new(pool, AppConfig::default())
    }

    async fn delete_with_header(state: AppState, header: Option<String>) -> StatusCode {
        let mut request_builder = Request::builder().uri(DELETE_URI).method("DELETE");
        if let Some(header) = header {
            request_builder = request_builder.header("Authorization", header);
        }

        let request = request_builder.body(Body::empty()).unwrap();
        create_router(state).oneshot(request).await.unwrap().status()
    }

    /// Generate random invalid tokens
    fn invalid_token_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            // Empty token
            Just("".to_string()),
            // Random string (not a valid JWT)
            "[a-zA-Z0-9]{10,50}",
            // Malformed JWT (wrong number of parts)
            "[a-zA-Z0-9]{10}\\.[a-zA-Z0-9]{10}",
            // Valid format but invalid signature
            "[a-zA-Z0-9_-]{20}\\.[a-zA-Z0-9_-]{20}\\.[a-zA-Z0-9_-]{20}",
        ]
    }

    /// Generate random authorization header formats
    fn auth_header_strategy() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            // No header
            Just(None),
            // Missing Bearer prefix
            invalid_token_strategy().prop_map(Some),
            // Wrong prefix
            invalid_token_strategy().prop_map(|t| Some(format!("Basic {}", t))),
            // Bearer with invalid token
            invalid_token_strategy().prop_map(|t| Some(format!("Bearer {}", t))),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_unauthenticated_requests_return_401(auth_header in auth_header_strategy()) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let status = rt.block_on(async {
                let state = create_test_state().await;
                delete_with_header(state, auth_header).await
            });

            prop_assert_eq!(status, StatusCode::UNAUTHORIZED);
        }
    }

    #[tokio::test]
    async fn test_missing_auth_header_returns_401() {
        let status = delete_with_header(create_test_state().await, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_token_with_wrong_secret_returns_401() {
        let state = create_test_state().await;
        let foreign = TokenService::new("wrong-secret-key", 1200);
        let token = foreign.issue_token("admin").unwrap();

        let status = delete_with_header(state, Some(format!("Bearer {}", token))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expired_token_returns_401() {
        let state = create_test_state().await;
        let token = state
            .jwt()
            .issue_token_at("admin", Utc::now() - Duration::minutes(21))
            .unwrap();

        let status = delete_with_header(state, Some(format!("Bearer {}", token))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_admin_token_returns_403() {
        let state = create_test_state().await;
        let token = state.jwt().issue_token("seller").unwrap();

        let status = delete_with_header(state, Some(format!("Bearer {}", token))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_valid_admin_token_passes_auth() {
        let state = create_test_state().await;
        let token = state.jwt().issue_token("admin").unwrap();

        let status = delete_with_header(state, Some(format!("Bearer {}", token))).await;

        // No product 1 exists, so the request gets past auth and misses
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_lowercase_bearer_scheme_passes_auth() {
        let state = create_test_state().await;
        let token = state.jwt().issue_token("admin").unwrap();

        let status = delete_with_header(state, Some(format!("bearer {}", token))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_login_form_statuses() {
        let state = create_test_state().await;
        let hash = PasswordService::hash("secret123").unwrap();
        SellerRepository::create(state.db(), "admin", "admin@example.com", &hash)
            .await
            .unwrap();

        for (form, expected) in [
            ("username=admin&password=secret123", StatusCode::OK),
            ("username=admin&password=wrong", StatusCode::UNAUTHORIZED),
            ("username=ghost&password=secret123", StatusCode::NOT_FOUND),
        ] {
            let request = Request::builder()
                .uri("/login")
                .method("POST")
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(Body::from(form))
                .unwrap();

            let response = create_router(state.clone()).oneshot(request).await.unwrap();
            assert_eq!(response.status(), expected, "form: {}", form);
        }
    }
}
