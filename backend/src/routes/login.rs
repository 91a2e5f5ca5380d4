//! Login route
//!
//! `POST /login` takes an OAuth2-style password form and returns a bearer
//! token. Password verification runs on the blocking thread pool.

use crate::error::ApiResult;
use crate::services::SellerService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Form, Json, Router};
use product_catalog_shared::types::{AccessToken, LoginForm};

/// Create login routes
pub fn login_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Login with username and password
///
/// POST /login
async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> ApiResult<Json<AccessToken>> {
    let token = SellerService::login(state.db(), state.jwt(), &form.username, &form.password).await?;
    Ok(Json(AccessToken::bearer(token)))
}
