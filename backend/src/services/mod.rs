//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the authentication layer.

pub mod product;
pub mod seller;

pub use product::ProductService;
pub use seller::SellerService;
