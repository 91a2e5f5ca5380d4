//! Standalone movie catalog demo
//!
//! Served by the `movie-catalog` binary; shares error handling and
//! telemetry with the product service but no state.

mod catalog;
pub mod routes;

pub use catalog::MovieCatalog;
pub use routes::create_router;
