//! Error types for `campus-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// A caller-supplied identifier is already held by a live record.
  #[error("{resource} with id {id} already exists")]
  Conflict { resource: &'static str, id: Uuid },

  /// No live record holds the identifier.
  #[error("{resource} not found: {id}")]
  NotFound { resource: &'static str, id: Uuid },
}

impl Error {
  pub fn conflict<R: crate::Resource>(id: Uuid) -> Self {
    Self::Conflict { resource: R::NAME, id }
  }

  pub fn not_found<R: crate::Resource>(id: Uuid) -> Self {
    Self::NotFound { resource: R::NAME, id }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
