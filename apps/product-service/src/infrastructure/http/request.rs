//! HTTP request DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Body for create and update requests.
///
/// Any id supplied by the client is ignored: the store issues ids on
/// create, and the path id wins on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPayload {
    /// Ignored; present so a previously fetched entity can be posted back.
    #[serde(default)]
    pub id: Option<i64>,
    /// Product name.
    pub name: String,
    /// Product price.
    pub price: f64,
}

impl ProductPayload {
    /// Convert into an unpersisted entity, discarding any client id.
    #[must_use]
    pub fn into_product(self) -> Product {
        Product::new(self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_without_id() {
        let payload: ProductPayload =
            serde_json::from_str(r#"{"name":"Widget","price":9.99}"#).unwrap();

        assert_eq!(payload.id, None);
        assert_eq!(payload.name, "Widget");
    }

    #[test]
    fn into_product_discards_client_id() {
        let payload: ProductPayload =
            serde_json::from_str(r#"{"id":99,"name":"Widget","price":9.99}"#).unwrap();

        let product = payload.into_product();
        assert_eq!(product.id, None);
    }
}
