//! Course — a university course offering.

use serde::{Deserialize, Serialize};

use crate::{
  Patch, Resource,
  resource::{eq, eq_opt},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
  /// e.g. `COMS W4153`.
  pub course_code: String,
  pub title:       String,
  pub description: String,
  pub credits:     i64,
  pub instructor:  String,
  /// e.g. `MWF 10:00-11:15`.
  pub schedule:    String,
  #[serde(default)]
  pub semester:    Option<String>,
  #[serde(default)]
  pub location:    Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CourseUpdate {
  pub course_code: Patch<String>,
  pub title:       Patch<String>,
  pub description: Patch<String>,
  pub credits:     Patch<i64>,
  pub instructor:  Patch<String>,
  pub schedule:    Patch<String>,
  pub semester:    Patch<Option<String>>,
  pub location:    Patch<Option<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseFilter {
  pub course_code: Option<String>,
  pub title:       Option<String>,
  pub instructor:  Option<String>,
  pub credits:     Option<i64>,
  pub semester:    Option<String>,
}

impl Resource for Course {
  const NAME: &'static str = "Course";
  const COLLECTION: &'static str = "courses";

  type Create = Course;
  type Update = CourseUpdate;
  type Filter = CourseFilter;

  fn from_create(input: Course) -> Self { input }

  fn apply(&mut self, u: CourseUpdate) {
    u.course_code.apply_to(&mut self.course_code);
    u.title.apply_to(&mut self.title);
    u.description.apply_to(&mut self.description);
    u.credits.apply_to(&mut self.credits);
    u.instructor.apply_to(&mut self.instructor);
    u.schedule.apply_to(&mut self.schedule);
    u.semester.apply_to(&mut self.semester);
    u.location.apply_to(&mut self.location);
  }

  fn matches(&self, f: &CourseFilter) -> bool {
    eq(f.course_code.as_deref(), self.course_code.as_str())
      && eq(f.title.as_deref(), self.title.as_str())
      && eq(f.instructor.as_deref(), self.instructor.as_str())
      && eq(f.credits.as_ref(), &self.credits)
      && eq_opt(f.semester.as_deref(), self.semester.as_deref())
  }
}
