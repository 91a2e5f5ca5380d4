//! Product catalog API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::ProductService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use product_catalog_shared::types::{
    DisplayProduct, ProductDeletedResponse, ProductRequest, ProductResponse, SellerIdQuery,
};

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/addProduct", post(add_product))
        .route("/listAllProducts", get(list_all_products))
        .route("/getProduct/:product_id", get(get_product))
        .route("/updateProduct/:product_id", put(update_product))
        .route("/deleteProduct/:product_id", delete(delete_product))
}

/// POST /api/v1/products/addProduct?seller_id=N
async fn add_product(
    State(state): State<AppState>,
    Query(query): Query<SellerIdQuery>,
    Json(req): Json<ProductRequest>,
) -> ApiResult<(StatusCode, Json<ProductResponse>)> {
    let product = ProductService::add_product(state.db(), query.seller_id, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            message: "Product added successfully".to_string(),
            product,
        }),
    ))
}

/// GET /api/v1/products/listAllProducts
async fn list_all_products(State(state): State<AppState>) -> ApiResult<Json<Vec<DisplayProduct>>> {
    Ok(Json(ProductService::list_all(state.db()).await?))
}

/// GET /api/v1/products/getProduct/{product_id}
async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> ApiResult<Json<DisplayProduct>> {
    Ok(Json(ProductService::get_product(state.db(), product_id).await?))
}

/// PUT /api/v1/products/updateProduct/{product_id}
async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Json(req): Json<ProductRequest>,
) -> ApiResult<Json<ProductResponse>> {
    let product = ProductService::update_product(state.db(), product_id, &req).await?;

    Ok(Json(ProductResponse {
        message: "Product updated successfully".to_string(),
        product,
    }))
}

/// DELETE /api/v1/products/deleteProduct/{product_id}
///
/// # Authentication
/// Requires a Bearer token belonging to the administrator account.
async fn delete_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(product_id): Path<i64>,
) -> ApiResult<Json<ProductDeletedResponse>> {
    ProductService::delete_product(
        state.db(),
        product_id,
        &auth.username,
        &state.config().auth.admin_username,
    )
    .await?;

    Ok(Json(ProductDeletedResponse {
        message: "Product deleted successfully".to_string(),
        product_id,
    }))
}
