//! The `ResourceStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `campus-store-memory`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{Record, Resource, Result};

/// An identifier-keyed collection of records of a single resource type.
///
/// Every mutation is visible to the next operation on the same store. Stores
/// for different resource types never share state, and no operation spans
/// more than one store.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ResourceStore<R: Resource>: Send + Sync {
  /// Insert a new record and return it.
  ///
  /// The identifier is taken from the payload if the resource accepts one,
  /// otherwise generated. Both timestamps are set to the current time.
  /// Fails with [`Error::Conflict`](crate::Error::Conflict) if a caller-supplied
  /// identifier is already held by a live record.
  fn create(
    &self,
    input: R::Create,
  ) -> impl Future<Output = Result<Record<R>>> + Send + '_;

  /// Return every record matching `filter`, in insertion order.
  fn list<'a>(
    &'a self,
    filter: &'a R::Filter,
  ) -> impl Future<Output = Result<Vec<Record<R>>>> + Send + 'a;

  /// Retrieve a record by identifier.
  fn get(&self, id: Uuid) -> impl Future<Output = Result<Record<R>>> + Send + '_;

  /// Overlay the supplied fields of `update` onto the stored record and
  /// refresh `updated_at`. The identifier and `created_at` never change.
  fn update(
    &self,
    id: Uuid,
    update: R::Update,
  ) -> impl Future<Output = Result<Record<R>>> + Send + '_;

  /// Remove a record permanently.
  fn delete(&self, id: Uuid) -> impl Future<Output = Result<()>> + Send + '_;
}
