//! HTTP server wiring for the Campus API.
//!
//! Owns the four in-memory resource stores ([`Catalog`]), the runtime
//! configuration ([`ServerConfig`]), and the assembled axum [`Router`].

use std::sync::Arc;

use axum::Router;
use campus_api::{HostInfo, ResourceRoutes, meta_router};
use campus_core::{
  address::Address, assignment::Assignment, course::Course, person::Person,
};
use campus_store_memory::MemoryStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `CAMPUS_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

impl ServerConfig {
  pub const DEFAULT_HOST: &'static str = "0.0.0.0";
  pub const DEFAULT_PORT: u16 = 8000;

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Stores ───────────────────────────────────────────────────────────────────

/// One store per resource type, built once at start-up and handed to the
/// router. Stores never share state with each other.
#[derive(Clone, Default)]
pub struct Catalog {
  pub persons:     Arc<MemoryStore<Person>>,
  pub addresses:   Arc<MemoryStore<Address>>,
  pub courses:     Arc<MemoryStore<Course>>,
  pub assignments: Arc<MemoryStore<Assignment>>,
}

impl Catalog {
  pub fn new() -> Self { Self::default() }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router.
///
/// Only addresses and courses expose `DELETE`.
pub fn router(catalog: &Catalog, host: HostInfo) -> Router {
  Router::new()
    .merge(
      ResourceRoutes::<Person, _>::new(catalog.persons.clone()).into_router(),
    )
    .merge(
      ResourceRoutes::<Address, _>::new(catalog.addresses.clone())
        .with_delete()
        .into_router(),
    )
    .merge(
      ResourceRoutes::<Course, _>::new(catalog.courses.clone())
        .with_delete()
        .into_router(),
    )
    .merge(
      ResourceRoutes::<Assignment, _>::new(catalog.assignments.clone())
        .into_router(),
    )
    .merge(meta_router(host))
    .layer(TraceLayer::new_for_http())
}
