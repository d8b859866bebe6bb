//! Persistence Adapters
//!
//! Store implementations of the product repository trait.

pub mod in_memory;
pub mod sqlite;

pub use in_memory::InMemoryProductRepository;
pub use sqlite::SqliteProductRepository;
