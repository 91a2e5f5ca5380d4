//! Credential verification against an injected user store

use super::{AuthError, PasswordService, TokenService};
use crate::repositories::{SellerRecord, SellerRepository};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, info};

/// Stored credentials for one account
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl From<SellerRecord> for CredentialRecord {
    fn from(seller: SellerRecord) -> Self {
        Self {
            username: seller.username,
            email: seller.email,
            password_hash: seller.password_hash,
        }
    }
}

/// Read-only user lookup used by [`CredentialService::authenticate`]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_user_by_username(&self, username: &str) -> anyhow::Result<Option<CredentialRecord>>;
}

#[async_trait]
impl CredentialStore for SqlitePool {
    async fn find_user_by_username(&self, username: &str) -> anyhow::Result<Option<CredentialRecord>> {
        Ok(SellerRepository::find_by_username(self, username)
            .await?
            .map(CredentialRecord::from))
    }
}

/// Username/password authentication
pub struct CredentialService;

impl CredentialService {
    /// Check `password` against the stored hash for `username` and issue a token
    ///
    /// Fails with `NotFound` for an unknown username and `Unauthorized` for a
    /// wrong password.
    pub async fn authenticate<S>(
        store: &S,
        tokens: &TokenService,
        username: &str,
        password: &str,
    ) -> Result<String, AuthError>
    where
        S: CredentialStore + ?Sized,
    {
        let user = store
            .find_user_by_username(username)
            .await?
            .ok_or(AuthError::NotFound)?;

        let valid = PasswordService::verify_async(password.to_string(), user.password_hash)
            .await?;

        if !valid {
            debug!(username = %username, "Password mismatch");
            return Err(AuthError::unauthorized("Invalid username or password"));
        }

        let token = tokens.issue_token(&user.username)?;
        info!(username = %user.username, "Issued access token");
        Ok(token)
    }
}
