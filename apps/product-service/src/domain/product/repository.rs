//! Product Repository Trait
//!
//! Defines the persistence abstraction for products.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::entity::Product;
use super::errors::RepositoryError;

/// Repository trait for product persistence.
///
/// This is a domain interface (port) that is implemented by
/// infrastructure adapters (SQLite, in-memory, etc.).
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Return every persisted product in store order (primary-key order).
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Find a product by id. Absence is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;

    /// Save a product (insert or overwrite).
    ///
    /// Inserts when the product has no id and returns the persisted
    /// instance with the id populated. Otherwise overwrites the stored
    /// record matching the id; an overwrite that matches no row leaves
    /// the store unchanged.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn save(&self, product: &Product) -> Result<Product, RepositoryError>;

    /// Delete the record with the given id.
    ///
    /// Idempotent: deleting an absent record succeeds.
    ///
    /// # Errors
    ///
    /// Returns error if the deletion fails.
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
}
