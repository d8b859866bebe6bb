//! Application Layer
//!
//! Orchestrates domain logic over the persistence port. There is no
//! business logic here beyond delegation and the merge performed on
//! update; not-found outcomes stay `Option`, never errors.

pub mod services;

pub use services::*;
