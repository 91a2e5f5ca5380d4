//! Seller repository for database operations

use anyhow::Result;
use sqlx::SqlitePool;

/// Seller record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SellerRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Seller repository for database operations
pub struct SellerRepository;

impl SellerRepository {
    /// Create a new seller
    pub async fn create(
        pool: &SqlitePool,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<SellerRecord> {
        let seller = sqlx::query_as::<_, SellerRecord>(
            r#"
            INSERT INTO sellers (username, email, password_hash)
            VALUES (?1, ?2, ?3)
            RETURNING id, username, email, password_hash
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;

        Ok(seller)
    }

    /// Find seller by username
    pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<SellerRecord>> {
        let seller = sqlx::query_as::<_, SellerRecord>(
            r#"
            SELECT id, username, email, password_hash
            FROM sellers
            WHERE username = ?1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(seller)
    }

    /// Find seller by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<SellerRecord>> {
        let seller = sqlx::query_as::<_, SellerRecord>(
            r#"
            SELECT id, username, email, password_hash
            FROM sellers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(seller)
    }

    /// Check whether the username or the email is already taken
    pub async fn username_or_email_exists(
        pool: &SqlitePool,
        username: &str,
        email: &str,
    ) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM sellers WHERE username = ?1 OR email = ?2)
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }
}
