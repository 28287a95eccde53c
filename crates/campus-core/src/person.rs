//! Person — a member of the university, with embedded postal addresses.
//!
//! The addresses a person holds are values, not references into the Address
//! collection; each carries its own identifier only for client bookkeeping.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Patch, Resource,
  address::Address,
  resource::{eq, eq_display, eq_opt},
};

/// An address embedded in a [`Person`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonAddress {
  #[serde(default = "Uuid::new_v4")]
  pub id:      Uuid,
  #[serde(flatten)]
  pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  /// Columbia University Network ID, e.g. `abc1234`.
  pub uni:        String,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  #[serde(default)]
  pub phone:      Option<String>,
  #[serde(default)]
  pub birth_date: Option<NaiveDate>,
  #[serde(default)]
  pub addresses:  Vec<PersonAddress>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonUpdate {
  pub uni:        Patch<String>,
  pub first_name: Patch<String>,
  pub last_name:  Patch<String>,
  pub email:      Patch<String>,
  pub phone:      Patch<Option<String>>,
  pub birth_date: Patch<Option<NaiveDate>>,
  pub addresses:  Patch<Vec<PersonAddress>>,
}

/// Query parameters for `GET /persons`.
///
/// `birth_date` is compared against the `YYYY-MM-DD` rendering of the stored
/// date. `city` and `country` match if at least one embedded address has that
/// value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonFilter {
  pub uni:        Option<String>,
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
  pub email:      Option<String>,
  pub phone:      Option<String>,
  pub birth_date: Option<String>,
  pub city:       Option<String>,
  pub country:    Option<String>,
}

impl Person {
  fn has_address_where(
    &self,
    filter: Option<&str>,
    field: impl Fn(&Address) -> &str,
  ) -> bool {
    match filter {
      None => true,
      Some(f) => self.addresses.iter().any(|a| field(&a.address) == f),
    }
  }
}

impl Resource for Person {
  const NAME: &'static str = "Person";
  const COLLECTION: &'static str = "persons";

  type Create = Person;
  type Update = PersonUpdate;
  type Filter = PersonFilter;

  fn from_create(input: Person) -> Self { input }

  fn apply(&mut self, u: PersonUpdate) {
    u.uni.apply_to(&mut self.uni);
    u.first_name.apply_to(&mut self.first_name);
    u.last_name.apply_to(&mut self.last_name);
    u.email.apply_to(&mut self.email);
    u.phone.apply_to(&mut self.phone);
    u.birth_date.apply_to(&mut self.birth_date);
    u.addresses.apply_to(&mut self.addresses);
  }

  fn matches(&self, f: &PersonFilter) -> bool {
    eq(f.uni.as_deref(), self.uni.as_str())
      && eq(f.first_name.as_deref(), self.first_name.as_str())
      && eq(f.last_name.as_deref(), self.last_name.as_str())
      && eq(f.email.as_deref(), self.email.as_str())
      && eq_opt(f.phone.as_deref(), self.phone.as_deref())
      && eq_display(f.birth_date.as_deref(), self.birth_date.as_ref())
      && self.has_address_where(f.city.as_deref(), |a| a.city.as_str())
      && self.has_address_where(f.country.as_deref(), |a| a.country.as_str())
  }
}
