//! Product Catalog Shared Library
//!
//! This crate contains request/response types and input validation used by
//! the product catalog and movie catalog services.

pub mod types;
pub mod validation;

// Re-export commonly used items
pub use types::*;
