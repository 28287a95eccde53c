//! [`Record`] — the stored envelope around a resource payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stored instance of a resource: the payload plus the server-managed
/// identifier and timestamps.
///
/// Serialises flat, so a `Record<Course>` reads as
/// `{"id": .., "course_code": .., .., "created_at": .., "updated_at": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<R> {
  pub id:         Uuid,
  #[serde(flatten)]
  pub fields:     R,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl<R> Record<R> {
  /// A fresh record whose `created_at` and `updated_at` are both `now`.
  pub fn new(id: Uuid, fields: R, now: DateTime<Utc>) -> Self {
    Self {
      id,
      fields,
      created_at: now,
      updated_at: now,
    }
  }

  /// Advance `updated_at` to `now`, never moving it backwards.
  pub fn touch(&mut self, now: DateTime<Utc>) {
    if now > self.updated_at {
      self.updated_at = now;
    }
  }
}
