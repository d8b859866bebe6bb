//! SQLite product repository.
//!
//! Durable store for products, using SQLite via `SQLx`. Schema setup is
//! kept in-process: `connect` creates the database file and the products
//! table when they do not exist yet.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

use crate::domain::product::{Product, ProductRepository, RepositoryError};

/// SQLite implementation of `ProductRepository`.
pub struct SqliteProductRepository {
    /// Database connection pool.
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Connect to the database and prepare the schema.
    ///
    /// Creates the database file if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be connected or the schema
    /// cannot be created.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
    ) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| RepositoryError::Connection(e.to_string()))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;

        info!(max_connections, "SQLite connection pool initialized");

        let repository = Self { pool };
        repository.migrate().await?;
        Ok(repository)
    }

    /// Create a repository over an existing pool (for testing).
    #[must_use]
    pub const fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the products table if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub async fn migrate(&self) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                price REAL NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        debug!("Products schema ready");
        Ok(())
    }

    /// Convert a database row to a `Product`.
    fn row_to_product(row: &SqliteRow) -> Result<Product, RepositoryError> {
        Ok(Product {
            id: Some(
                row.try_get::<i64, _>("id")
                    .map_err(|e| RepositoryError::Query(format!("id: {e}")))?,
            ),
            name: row
                .try_get::<String, _>("name")
                .map_err(|e| RepositoryError::Query(format!("name: {e}")))?,
            price: row
                .try_get::<f64, _>("price")
                .map_err(|e| RepositoryError::Query(format!("price: {e}")))?,
        })
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query("SELECT id, name, price FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query("SELECT id, name, price FROM products WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        row.as_ref().map(Self::row_to_product).transpose()
    }

    async fn save(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut persisted = product.clone();

        match persisted.id {
            Some(id) => {
                sqlx::query("UPDATE products SET name = ?1, price = ?2 WHERE id = ?3")
                    .bind(&persisted.name)
                    .bind(persisted.price)
                    .bind(id)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;

                debug!(id, "Product updated");
            }
            None => {
                let result = sqlx::query("INSERT INTO products (name, price) VALUES (?1, ?2)")
                    .bind(&persisted.name)
                    .bind(persisted.price)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;

                let id = result.last_insert_rowid();
                persisted.id = Some(id);
                debug!(id, "Product inserted");
            }
        }

        Ok(persisted)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        debug!(id, "Product deleted");
        Ok(())
    }
}
