//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

// ============================================================================
// Authentication Types
// ============================================================================

/// Login form (`application/x-www-form-urlencoded`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Access token issued by `POST /login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AccessToken {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            message: Some("Login successful".to_string()),
        }
    }
}

// ============================================================================
// Seller Types
// ============================================================================

/// Seller registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSellerRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Public view of a seller (never carries the password hash)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySeller {
    pub username: String,
    pub email: String,
}

/// Seller registration response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerCreatedResponse {
    pub message: String,
    pub seller: DisplaySeller,
}

// ============================================================================
// Product Types
// ============================================================================

/// Product create/update request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    /// Only honoured on update; reassigns the product to another seller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<i64>,
}

/// Query string for `POST /api/v1/products/addProduct`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerIdQuery {
    pub seller_id: i64,
}

/// Product with its owning seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayProduct {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub seller: DisplaySeller,
}

/// Response for product create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub message: String,
    pub product: DisplayProduct,
}

/// Response for product deletion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDeletedResponse {
    pub message: String,
    pub product_id: i64,
}

// ============================================================================
// Movie Catalog Types
// ============================================================================

/// Thumbnail attached to a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

/// Movie as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub name: String,
    pub year: i32,
    pub tags: BTreeSet<String>,
    pub thumbnail: Vec<Thumbnail>,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

/// Request body for `POST /insert_movie`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMovieRequest {
    pub name: String,
    pub year: i32,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub thumbnail: Vec<Thumbnail>,
}

/// Query string for `GET /movies`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieQuery {
    #[serde(default)]
    pub id: u64,
}

/// Response for `POST /insert_movie`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieCreatedResponse {
    pub message: String,
    pub id: u64,
    #[serde(flatten)]
    pub movie: Movie,
}

/// Form body for `POST /insert_thumbnail`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewThumbnailForm {
    pub id: u64,
    pub url: String,
}

/// Response for `POST /insert_thumbnail`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThumbnailAddedResponse {
    pub message: String,
    pub movie_id: u64,
    pub thumbnail_url: String,
}
