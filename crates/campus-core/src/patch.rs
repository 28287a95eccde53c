//! [`Patch`] — the field wrapper behind partial updates.
//!
//! A partial update must tell "the key was not sent" apart from "the key was
//! sent with an empty or null value". Every updatable field is therefore a
//! `Patch<T>`, and nullable fields are a `Patch<Option<T>>` so that an explicit
//! JSON `null` becomes `Set(None)` rather than `Absent`.
//!
//! Fields must carry `#[serde(default)]` (or the container must) so a missing
//! key deserialises to [`Patch::Absent`].

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
  /// The key was not supplied; the stored value is kept.
  Absent,
  /// The key was supplied; the stored value is replaced.
  Set(T),
}

impl<T> Patch<T> {
  pub fn is_absent(&self) -> bool { matches!(self, Self::Absent) }

  /// Overwrite `target` if a value was supplied.
  pub fn apply_to(self, target: &mut T) {
    if let Self::Set(value) = self {
      *target = value;
    }
  }
}

// Manual impl: no `T: Default` bound.
impl<T> Default for Patch<T> {
  fn default() -> Self { Self::Absent }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
  T: Deserialize<'de>,
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    T::deserialize(deserializer).map(Self::Set)
  }
}
