//! Core types and trait definitions for the Campus resource API.
//!
//! This crate is deliberately free of HTTP and storage dependencies. It
//! defines the generic [`Record`](record::Record) envelope, the tri-state
//! [`Patch`](patch::Patch) used by partial updates, the [`Resource`] contract
//! each resource type fulfils, and the [`ResourceStore`](store::ResourceStore)
//! abstraction that storage backends implement.

pub mod address;
pub mod assignment;
pub mod course;
pub mod error;
pub mod patch;
pub mod person;
pub mod record;
pub mod resource;
pub mod store;

pub use error::{Error, Result};
pub use patch::Patch;
pub use record::Record;
pub use resource::Resource;
