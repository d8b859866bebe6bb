//! HTTP response DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// A product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    /// Store-generated identifier.
    pub id: Option<i64>,
    /// Product name.
    pub name: String,
    /// Product price.
    pub price: f64,
}

impl ProductResponse {
    /// Build a response from the persisted entity.
    #[must_use]
    pub fn from_product(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// API error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error code.
    pub code: String,
    /// Error message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_product_carries_every_field() {
        let product = Product {
            id: Some(1),
            name: "Widget".to_string(),
            price: 9.99,
        };

        let response = ProductResponse::from_product(product);
        assert_eq!(response.id, Some(1));
        assert_eq!(response.name, "Widget");
        assert_eq!(response.price, 9.99);
    }

    #[test]
    fn product_response_serde() {
        let response = ProductResponse {
            id: Some(1),
            name: "Widget".to_string(),
            price: 12.5,
        };

        let json = serde_json::to_string(&response).unwrap();
        let parsed: ProductResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
    }
}
