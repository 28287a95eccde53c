//! JSON REST API for the Campus resources.
//!
//! Exposes axum routers backed by any [`campus_core::store::ResourceStore`].
//! Each resource collection is mounted with [`ResourceRoutes`]; the
//! informational `/` and `/health` endpoints come from
//! [`health::meta_router`]. Transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! Router::new()
//!   .merge(ResourceRoutes::<Course, _>::new(courses).with_delete().into_router())
//!   .merge(health::meta_router(host))
//! ```

pub mod error;
pub mod health;
pub mod resources;

pub use error::ApiError;
pub use health::{HostInfo, meta_router};
pub use resources::ResourceRoutes;
