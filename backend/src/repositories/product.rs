//! Product repository for database operations

use anyhow::Result;
use sqlx::SqlitePool;

/// Product joined with its seller's public fields
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub seller_id: i64,
    pub seller_username: String,
    pub seller_email: String,
}

/// Input for creating or replacing a product
#[derive(Debug, Clone)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub seller_id: i64,
}

const SELECT_PRODUCT: &str = r#"
    SELECT p.id, p.name, p.price, p.description, p.seller_id,
           s.username AS seller_username, s.email AS seller_email
    FROM products p
    JOIN sellers s ON s.id = p.seller_id
"#;

/// Product repository for database operations
pub struct ProductRepository;

impl ProductRepository {
    /// Insert a product and return it with its seller
    pub async fn create(pool: &SqlitePool, input: ProductInput) -> Result<ProductRecord> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO products (name, price, description, seller_id)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(&input.description)
        .bind(input.seller_id)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Product {} vanished after insert", id))
    }

    /// List every product, oldest first
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<ProductRecord>> {
        let query = format!("{} ORDER BY p.id", SELECT_PRODUCT);
        let products = sqlx::query_as::<_, ProductRecord>(&query)
            .fetch_all(pool)
            .await?;

        Ok(products)
    }

    /// Find product by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<ProductRecord>> {
        let query = format!("{} WHERE p.id = ?1", SELECT_PRODUCT);
        let product = sqlx::query_as::<_, ProductRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(product)
    }

    /// Replace a product's fields; `None` when the product does not exist
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        input: ProductInput,
    ) -> Result<Option<ProductRecord>> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?2, price = ?3, description = ?4, seller_id = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.price)
        .bind(&input.description)
        .bind(input.seller_id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Self::find_by_id(pool, id).await
    }

    /// Delete a product
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
