//! Seller API routes

use crate::error::ApiResult;
use crate::services::SellerService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use product_catalog_shared::types::{CreateSellerRequest, SellerCreatedResponse};

/// Create seller routes
pub fn seller_routes() -> Router<AppState> {
    Router::new().route("/addNewSeller", post(add_new_seller))
}

/// POST /api/v1/sellers/addNewSeller - register a seller
///
/// The response never includes the password or its hash.
async fn add_new_seller(
    State(state): State<AppState>,
    Json(req): Json<CreateSellerRequest>,
) -> ApiResult<(StatusCode, Json<SellerCreatedResponse>)> {
    let seller = SellerService::register(state.db(), &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(SellerCreatedResponse {
            message: "Seller created successfully".to_string(),
            seller,
        }),
    ))
}
