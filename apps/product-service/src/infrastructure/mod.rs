//! Infrastructure Layer
//!
//! Adapters (implementations) for the port defined in the domain layer,
//! following hexagonal architecture:
//!
//! - **Driven Adapters (Outbound)**:
//!   - `persistence/`: repository implementations (SQLite, in-memory)
//!
//! - **Driver Adapters (Inbound)**:
//!   - `http/`: REST API controller

pub mod http;
pub mod persistence;
