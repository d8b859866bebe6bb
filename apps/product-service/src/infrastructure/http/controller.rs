//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the product service. Absence of
//! a record maps to 404 with an empty body; storage failures map to 500.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::application::services::ProductService;
use crate::domain::product::{ProductRepository, RepositoryError};

use super::request::ProductPayload;
use super::response::{ApiErrorResponse, HealthResponse, ProductResponse};

/// Application state shared across handlers.
pub struct AppState<R>
where
    R: ProductRepository,
{
    /// Product service handling every operation.
    pub service: Arc<ProductService<R>>,
    /// Application version.
    pub version: String,
}

impl<R> Clone for AppState<R>
where
    R: ProductRepository,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<R>(state: AppState<R>) -> Router
where
    R: ProductRepository + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<R>(State(state): State<AppState<R>>) -> impl IntoResponse
where
    R: ProductRepository,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// List all products.
async fn list_products<R>(State(state): State<AppState<R>>) -> Result<Response, ApiError>
where
    R: ProductRepository,
{
    let products = state.service.get_all_products().await?;
    let body: Vec<ProductResponse> = products
        .into_iter()
        .map(ProductResponse::from_product)
        .collect();

    Ok(Json(body).into_response())
}

/// Fetch a single product; 404 with empty body when absent.
async fn get_product<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError>
where
    R: ProductRepository,
{
    match state.service.get_product_by_id(id).await? {
        Some(product) => Ok(Json(ProductResponse::from_product(product)).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Create a product; the response carries the generated id.
///
/// Responds 200 rather than 201: the creation status stays at the
/// framework default.
async fn create_product<R>(
    State(state): State<AppState<R>>,
    Json(payload): Json<ProductPayload>,
) -> Result<Response, ApiError>
where
    R: ProductRepository,
{
    let created = state.service.save_product(payload.into_product()).await?;

    tracing::info!(id = created.id, name = %created.name, "Product created");

    Ok(Json(ProductResponse::from_product(created)).into_response())
}

/// Overwrite name and price of an existing product; 404 when absent.
async fn update_product<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> Result<Response, ApiError>
where
    R: ProductRepository,
{
    let details = payload.into_product();
    match state.service.update_product(id, &details).await? {
        Some(updated) => {
            tracing::info!(id, "Product updated");
            Ok(Json(ProductResponse::from_product(updated)).into_response())
        }
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Delete a product; 204 regardless of prior existence.
async fn delete_product<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError>
where
    R: ProductRepository,
{
    state.service.delete_product(id).await?;

    tracing::info!(id, "Product deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// API error wrapper mapping repository failures to HTTP responses.
#[derive(Debug)]
pub struct ApiError(RepositoryError);

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Request failed");

        let body = ApiErrorResponse {
            code: "STORAGE_ERROR".to_string(),
            message: self.0.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
