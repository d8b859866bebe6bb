//! Product application service.
//!
//! Thin orchestration over the repository port. The only logic beyond
//! delegation is the merge performed on update: name and price are
//! overwritten, the id is never touched.

use std::sync::Arc;

use crate::domain::product::{Product, ProductRepository, RepositoryError};

/// Application service for product CRUD.
pub struct ProductService<R>
where
    R: ProductRepository,
{
    repository: Arc<R>,
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    /// Create a new `ProductService`.
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Return every persisted product, order store-defined.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn get_all_products(&self) -> Result<Vec<Product>, RepositoryError> {
        self.repository.find_all().await
    }

    /// Return the product with the given id, or `None` if there is none.
    /// A missing id is a normal outcome, not a failure.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn get_product_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        self.repository.find_by_id(id).await
    }

    /// Persist the product as-is. No validation of name or price.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    pub async fn save_product(&self, product: Product) -> Result<Product, RepositoryError> {
        self.repository.save(&product).await
    }

    /// Overwrite name and price of the product with the given id and
    /// persist it. Returns `None` when no such product exists; no record
    /// is created in that case.
    ///
    /// # Errors
    ///
    /// Returns error if the lookup or persistence fails.
    pub async fn update_product(
        &self,
        id: i64,
        details: &Product,
    ) -> Result<Option<Product>, RepositoryError> {
        match self.repository.find_by_id(id).await? {
            Some(mut product) => {
                product.name = details.name.clone();
                product.price = details.price;
                let updated = self.repository.save(&product).await?;
                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }

    /// Delete the product with the given id. Succeeds even when nothing
    /// matched.
    ///
    /// # Errors
    ///
    /// Returns error if the deletion fails.
    pub async fn delete_product(&self, id: i64) -> Result<(), RepositoryError> {
        self.repository.delete_by_id(id).await
    }
}
