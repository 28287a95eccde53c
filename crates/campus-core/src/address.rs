//! Address — a postal address, stored in its own collection.
//!
//! Address is the only resource whose create payload may carry an `id`; a
//! collision with a live address is reported as a conflict.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Patch, Resource,
  resource::{eq, eq_opt},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
  pub street:      String,
  pub city:        String,
  /// State, province, or region.
  #[serde(default)]
  pub state:       Option<String>,
  #[serde(default)]
  pub postal_code: Option<String>,
  pub country:     String,
}

/// JSON body accepted by `POST /addresses`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAddress {
  #[serde(default)]
  pub id:      Option<Uuid>,
  #[serde(flatten)]
  pub address: Address,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressUpdate {
  pub street:      Patch<String>,
  pub city:        Patch<String>,
  pub state:       Patch<Option<String>>,
  pub postal_code: Patch<Option<String>>,
  pub country:     Patch<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressFilter {
  pub street:      Option<String>,
  pub city:        Option<String>,
  pub state:       Option<String>,
  pub postal_code: Option<String>,
  pub country:     Option<String>,
}

impl Resource for Address {
  const NAME: &'static str = "Address";
  const COLLECTION: &'static str = "addresses";

  type Create = NewAddress;
  type Update = AddressUpdate;
  type Filter = AddressFilter;

  fn requested_id(input: &NewAddress) -> Option<Uuid> { input.id }

  fn from_create(input: NewAddress) -> Self { input.address }

  fn apply(&mut self, u: AddressUpdate) {
    u.street.apply_to(&mut self.street);
    u.city.apply_to(&mut self.city);
    u.state.apply_to(&mut self.state);
    u.postal_code.apply_to(&mut self.postal_code);
    u.country.apply_to(&mut self.country);
  }

  fn matches(&self, f: &AddressFilter) -> bool {
    eq(f.street.as_deref(), self.street.as_str())
      && eq(f.city.as_deref(), self.city.as_str())
      && eq_opt(f.state.as_deref(), self.state.as_deref())
      && eq_opt(f.postal_code.as_deref(), self.postal_code.as_deref())
      && eq(f.country.as_deref(), self.country.as_str())
  }
}
