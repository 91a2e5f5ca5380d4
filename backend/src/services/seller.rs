//! Seller registration and login
//!
//! Password hashing/verification runs on the blocking thread pool.

use crate::auth::{CredentialService, PasswordService, TokenService};
use crate::error::ApiError;
use crate::repositories::SellerRepository;
use product_catalog_shared::types::{CreateSellerRequest, DisplaySeller};
use product_catalog_shared::validation::{validate_email, validate_password, validate_username};
use sqlx::SqlitePool;
use tracing::info;

/// Seller service for account operations
pub struct SellerService;

impl SellerService {
    /// Register a new seller with a hashed password
    pub async fn register(
        pool: &SqlitePool,
        req: &CreateSellerRequest,
    ) -> Result<DisplaySeller, ApiError> {
        validate_username(&req.username).map_err(ApiError::Validation)?;
        validate_email(&req.email).map_err(ApiError::Validation)?;
        validate_password(&req.password).map_err(ApiError::Validation)?;

        if SellerRepository::username_or_email_exists(pool, &req.username, &req.email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict(
                "Username or email already registered".to_string(),
            ));
        }

        let password_hash = PasswordService::hash_async(req.password.clone())
            .await
            .map_err(ApiError::Internal)?;

        // A concurrent registration can still win the race to the UNIQUE index
        let seller = SellerRepository::create(pool, &req.username, &req.email, &password_hash)
            .await
            .map_err(creation_error)?;

        info!(seller_id = seller.id, username = %seller.username, "Seller registered");

        Ok(DisplaySeller {
            username: seller.username,
            email: seller.email,
        })
    }

    /// Login with username and password, returning a bearer token
    pub async fn login(
        pool: &SqlitePool,
        tokens: &TokenService,
        username: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        Ok(CredentialService::authenticate(pool, tokens, username, password).await?)
    }
}

/// Map an insert failure, turning a UNIQUE violation into `Conflict`
fn creation_error(err: anyhow::Error) -> ApiError {
    let unique_violation = matches!(
        err.downcast_ref::<sqlx::Error>(),
        Some(sqlx::Error::Database(db_err)) if db_err.is_unique_violation()
    );

    if unique_violation {
        ApiError::Conflict("Username or email already registered".to_string())
    } else {
        ApiError::Internal(err)
    }
}
