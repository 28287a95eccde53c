//! The [`Resource`] contract and the filter predicates shared by resources.

use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

/// A resource type that can be held in a
/// [`ResourceStore`](crate::store::ResourceStore).
///
/// Each implementor names its create payload, its partial update payload, and
/// its list filter. The store owns identifier and timestamp handling; the
/// resource only knows how to build, patch, and match its own fields.
pub trait Resource:
  Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
  /// Human-readable singular name, e.g. `"Course"`.
  const NAME: &'static str;
  /// Path segment of the collection, e.g. `"courses"`.
  const COLLECTION: &'static str;

  type Create: DeserializeOwned + Send + 'static;
  type Update: DeserializeOwned + Clone + Send + 'static;
  type Filter: DeserializeOwned + Default + Send + Sync + 'static;

  /// The identifier the caller asked for, if this resource accepts one.
  fn requested_id(_input: &Self::Create) -> Option<Uuid> { None }

  fn from_create(input: Self::Create) -> Self;

  /// Overlay every supplied field of `update` onto `self`.
  fn apply(&mut self, update: Self::Update);

  /// `true` if `self` satisfies every constraint in `filter`.
  fn matches(&self, filter: &Self::Filter) -> bool;
}

// ─── Filter predicates ───────────────────────────────────────────────────────

/// Exact equality; an absent filter matches anything.
pub(crate) fn eq<T: PartialEq + ?Sized>(filter: Option<&T>, value: &T) -> bool {
  filter.is_none_or(|f| f == value)
}

/// Exact equality against a nullable stored value; a stored `None` only
/// matches an absent filter.
pub(crate) fn eq_opt<T: PartialEq + ?Sized>(
  filter: Option<&T>,
  value: Option<&T>,
) -> bool {
  match filter {
    None => true,
    Some(f) => value.is_some_and(|v| v == f),
  }
}

/// Compare a filter string against the textual rendering of a stored value,
/// e.g. a `NaiveDate` rendered as `YYYY-MM-DD`.
pub(crate) fn eq_display<T: std::fmt::Display>(
  filter: Option<&str>,
  value: Option<&T>,
) -> bool {
  match filter {
    None => true,
    Some(f) => value.is_some_and(|v| v.to_string() == f),
  }
}
