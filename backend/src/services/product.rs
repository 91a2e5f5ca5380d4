//! Product catalog service
//!
//! Validates input, checks seller ownership and enforces the admin-only
//! delete rule.

use crate::error::ApiError;
use crate::repositories::{ProductInput, ProductRecord, ProductRepository, SellerRepository};
use product_catalog_shared::types::{DisplayProduct, DisplaySeller, ProductRequest};
use product_catalog_shared::validation::{validate_price, validate_product_name};
use sqlx::SqlitePool;
use tracing::{info, warn};

impl From<ProductRecord> for DisplayProduct {
    fn from(record: ProductRecord) -> Self {
        DisplayProduct {
            id: record.id,
            name: record.name,
            price: record.price,
            description: record.description,
            seller: DisplaySeller {
                username: record.seller_username,
                email: record.seller_email,
            },
        }
    }
}

/// Product service for catalog operations
pub struct ProductService;

impl ProductService {
    /// Add a product owned by `seller_id`
    pub async fn add_product(
        pool: &SqlitePool,
        seller_id: i64,
        req: &ProductRequest,
    ) -> Result<DisplayProduct, ApiError> {
        Self::validate(req)?;
        Self::ensure_seller_exists(pool, seller_id).await?;

        let record = ProductRepository::create(pool, Self::input(req, seller_id))
            .await
            .map_err(ApiError::Internal)?;

        info!(product_id = record.id, seller_id, "Product added");
        Ok(record.into())
    }

    /// List every product with its seller
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<DisplayProduct>, ApiError> {
        let records = ProductRepository::list_all(pool)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(DisplayProduct::from).collect())
    }

    /// Get one product
    pub async fn get_product(pool: &SqlitePool, product_id: i64) -> Result<DisplayProduct, ApiError> {
        ProductRepository::find_by_id(pool, product_id)
            .await
            .map_err(ApiError::Internal)?
            .map(DisplayProduct::from)
            .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))
    }

    /// Replace a product's name, price and description
    ///
    /// The seller changes only when `seller_id` is present in the request.
    pub async fn update_product(
        pool: &SqlitePool,
        product_id: i64,
        req: &ProductRequest,
    ) -> Result<DisplayProduct, ApiError> {
        Self::validate(req)?;

        let existing = ProductRepository::find_by_id(pool, product_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

        let seller_id = match req.seller_id {
            Some(seller_id) => {
                Self::ensure_seller_exists(pool, seller_id).await?;
                seller_id
            }
            None => existing.seller_id,
        };

        let record = ProductRepository::update(pool, product_id, Self::input(req, seller_id))
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

        info!(product_id, seller_id, "Product updated");
        Ok(record.into())
    }

    /// Delete a product; only `admin_username` may do this
    pub async fn delete_product(
        pool: &SqlitePool,
        product_id: i64,
        caller: &str,
        admin_username: &str,
    ) -> Result<(), ApiError> {
        if caller != admin_username {
            warn!(caller = %caller, product_id, "Non-admin attempted product deletion");
            return Err(ApiError::Forbidden(
                "Access denied. Only administrators can delete products.".to_string(),
            ));
        }

        let deleted = ProductRepository::delete(pool, product_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Product not found".to_string()));
        }

        info!(product_id, "Product deleted");
        Ok(())
    }

    fn validate(req: &ProductRequest) -> Result<(), ApiError> {
        validate_product_name(&req.name).map_err(ApiError::Validation)?;
        validate_price(req.price).map_err(ApiError::Validation)?;
        Ok(())
    }

    async fn ensure_seller_exists(pool: &SqlitePool, seller_id: i64) -> Result<(), ApiError> {
        SellerRepository::find_by_id(pool, seller_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Seller not found".to_string()))?;
        Ok(())
    }

    fn input(req: &ProductRequest, seller_id: i64) -> ProductInput {
        ProductInput {
            name: req.name.clone(),
            price: req.price,
            description: req.description.clone(),
            seller_id,
        }
    }
}
