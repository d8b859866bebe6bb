//! Domain Layer
//!
//! The innermost layer, free of infrastructure dependencies. It defines:
//!
//! - **Entities**: records with persistent identity
//! - **Repository Traits**: persistence abstractions (implemented in adapters)

pub mod product;
