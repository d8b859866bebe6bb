// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines
    )
)]

//! Product Service - Rust Core Library
//!
//! CRUD HTTP service for a product catalog backed by a relational store.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: the `Product` entity and the persistence port
//!   - `product`: entity, `ProductRepository` trait, repository errors
//!
//! - **Application**: orchestration over the persistence port
//!   - `services`: `ProductService` (delegation plus merge-on-update)
//!
//! - **Infrastructure**: adapters (implementations)
//!   - `http`: axum REST controller (driver adapter)
//!   - `persistence`: SQLite (`SQLx`) and in-memory repositories
//!
//! - **Config**: environment-driven server and persistence settings

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core entity and persistence port, no external systems.
pub mod domain;

/// Application layer - Services orchestrating persistence calls.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration - Server and persistence settings.
pub mod config;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::services::ProductService;
pub use config::{Config, PersistenceConfig, ServerConfig};
pub use domain::product::{Product, ProductRepository, RepositoryError};
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::{InMemoryProductRepository, SqliteProductRepository};
