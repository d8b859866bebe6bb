//! In-memory product repository for testing and development.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use crate::domain::product::{Product, ProductRepository, RepositoryError};

/// In-memory implementation of `ProductRepository`.
///
/// Issues ids from a process-local sequence starting at 1, mirroring the
/// store's autoincrement column. Suitable for testing and development.
/// Not for production use.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    rows: RwLock<BTreeMap<i64, Product>>,
    next_id: AtomicI64,
}

impl InMemoryProductRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(0),
        }
    }

    /// Get the number of products in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.read().unwrap().len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.read().unwrap().is_empty()
    }

    /// Clear all products from the repository.
    pub fn clear(&self) {
        let mut rows = self.rows.write().unwrap();
        rows.clear();
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = self.rows.read().unwrap();
        Ok(rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let rows = self.rows.read().unwrap();
        Ok(rows.get(&id).cloned())
    }

    async fn save(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut persisted = product.clone();
        let mut rows = self.rows.write().unwrap();

        match persisted.id {
            Some(id) => {
                if let Some(existing) = rows.get_mut(&id) {
                    *existing = persisted.clone();
                }
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                persisted.id = Some(id);
                rows.insert(id, persisted.clone());
            }
        }

        Ok(persisted)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().unwrap();
        rows.remove(&id);
        Ok(())
    }
}
