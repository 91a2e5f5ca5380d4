//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod product;
pub mod seller;

pub use product::{ProductInput, ProductRecord, ProductRepository};
pub use seller::{SellerRecord, SellerRepository};
