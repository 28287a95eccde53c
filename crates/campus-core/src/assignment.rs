//! Assignment — a piece of coursework belonging to a course.
//!
//! `course_id` is an unchecked reference: nothing verifies that the course
//! exists, on write or on read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Patch, Resource,
  resource::{eq, eq_display},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
  pub title:           String,
  #[serde(default)]
  pub description:     Option<String>,
  /// Free-form kind: homework, project, exam, quiz, ...
  pub assignment_type: String,
  pub course_id:       Uuid,
  pub assigned_date:   NaiveDate,
  pub due_date:        NaiveDate,
  #[serde(default)]
  pub max_points:      Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssignmentUpdate {
  pub title:           Patch<String>,
  pub description:     Patch<Option<String>>,
  pub assignment_type: Patch<String>,
  pub course_id:       Patch<Uuid>,
  pub assigned_date:   Patch<NaiveDate>,
  pub due_date:        Patch<NaiveDate>,
  pub max_points:      Patch<Option<i64>>,
}

/// Query parameters for `GET /assignments`. Dates are matched against their
/// `YYYY-MM-DD` rendering.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignmentFilter {
  pub title:           Option<String>,
  pub assignment_type: Option<String>,
  pub course_id:       Option<Uuid>,
  pub due_date:        Option<String>,
  pub assigned_date:   Option<String>,
}

impl Resource for Assignment {
  const NAME: &'static str = "Assignment";
  const COLLECTION: &'static str = "assignments";

  type Create = Assignment;
  type Update = AssignmentUpdate;
  type Filter = AssignmentFilter;

  fn from_create(input: Assignment) -> Self { input }

  fn apply(&mut self, u: AssignmentUpdate) {
    u.title.apply_to(&mut self.title);
    u.description.apply_to(&mut self.description);
    u.assignment_type.apply_to(&mut self.assignment_type);
    u.course_id.apply_to(&mut self.course_id);
    u.assigned_date.apply_to(&mut self.assigned_date);
    u.due_date.apply_to(&mut self.due_date);
    u.max_points.apply_to(&mut self.max_points);
  }

  fn matches(&self, f: &AssignmentFilter) -> bool {
    eq(f.title.as_deref(), self.title.as_str())
      && eq(f.assignment_type.as_deref(), self.assignment_type.as_str())
      && eq(f.course_id.as_ref(), &self.course_id)
      && eq_display(f.due_date.as_deref(), Some(&self.due_date))
      && eq_display(f.assigned_date.as_deref(), Some(&self.assigned_date))
  }
}
