//! Product entity.

use serde::{Deserialize, Serialize};

/// A product record with a persistent identity.
///
/// `id` is `None` for a product under construction and is assigned by the
/// backing store on first save; it never changes afterwards. `name` and
/// `price` are mutable and carry no constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-generated identifier. `None` until first save.
    #[serde(default)]
    pub id: Option<i64>,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: f64,
}

impl Product {
    /// Create a product that has not been persisted yet.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
        }
    }
}
