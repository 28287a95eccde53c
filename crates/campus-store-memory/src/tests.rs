//! Behavioural tests for `MemoryStore` across the four resource types.

use std::time::Duration;

use campus_core::{
  Error, Patch,
  address::{Address, AddressFilter, AddressUpdate, NewAddress},
  assignment::{Assignment, AssignmentFilter},
  course::{Course, CourseFilter, CourseUpdate},
  person::{Person, PersonAddress, PersonFilter, PersonUpdate},
  store::ResourceStore,
};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::MemoryStore;

fn cloud_computing() -> Course {
  Course {
    course_code: "COMS W4153".into(),
    title:       "Cloud Computing".into(),
    description: "Cloud concepts, architectures, and technologies.".into(),
    credits:     3,
    instructor:  "Ferguson".into(),
    schedule:    "MWF 10:00-11:15".into(),
    semester:    Some("Fall 2025".into()),
    location:    None,
  }
}

fn course(code: &str, instructor: &str, credits: i64) -> Course {
  Course {
    course_code: code.into(),
    instructor: instructor.into(),
    credits,
    ..cloud_computing()
  }
}

fn new_address(id: Option<Uuid>, city: &str) -> NewAddress {
  NewAddress {
    id,
    address: Address {
      street:      "1 Main St".into(),
      city:        city.into(),
      state:       None,
      postal_code: None,
      country:     "USA".into(),
    },
  }
}

fn person(uni: &str, cities: &[&str]) -> Person {
  Person {
    uni:        uni.into(),
    first_name: "Grace".into(),
    last_name:  "Hopper".into(),
    email:      format!("{uni}@columbia.edu"),
    phone:      None,
    birth_date: NaiveDate::from_ymd_opt(1906, 12, 9),
    addresses:  cities
      .iter()
      .map(|city| PersonAddress {
        id:      Uuid::new_v4(),
        address: new_address(None, city).address,
      })
      .collect(),
  }
}

fn homework(course_id: Uuid, due: &str) -> Assignment {
  Assignment {
    title: "Homework 1".into(),
    description: None,
    assignment_type: "homework".into(),
    course_id,
    assigned_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
    due_date: due.parse().unwrap(),
    max_points: Some(100),
  }
}

async fn tick() { tokio::time::sleep(Duration::from_millis(5)).await; }

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_generates_id_and_equal_timestamps() {
  let s = MemoryStore::<Course>::new();
  let c = s.create(cloud_computing()).await.unwrap();
  assert!(!c.id.is_nil());
  assert_eq!(c.created_at, c.updated_at);
  assert_eq!(c.fields, cloud_computing());
}

#[tokio::test]
async fn created_ids_are_unique() {
  let s = MemoryStore::<Course>::new();
  let mut ids = std::collections::HashSet::new();
  for _ in 0..50 {
    let c = s.create(cloud_computing()).await.unwrap();
    assert!(ids.insert(c.id), "duplicate id {}", c.id);
  }
  assert_eq!(s.len().await, 50);
}

#[tokio::test]
async fn create_honours_caller_supplied_address_id() {
  let s = MemoryStore::<Address>::new();
  let id = Uuid::new_v4();
  let a = s.create(new_address(Some(id), "Boston")).await.unwrap();
  assert_eq!(a.id, id);
}

#[tokio::test]
async fn create_with_colliding_address_id_conflicts() {
  let s = MemoryStore::<Address>::new();
  let id = Uuid::new_v4();
  s.create(new_address(Some(id), "Boston")).await.unwrap();

  let err = s.create(new_address(Some(id), "Chicago")).await.unwrap_err();
  assert_eq!(err, Error::Conflict { resource: "Address", id });

  // The original record is untouched.
  let kept = s.get(id).await.unwrap();
  assert_eq!(kept.fields.city, "Boston");
  assert_eq!(s.len().await, 1);
}

#[tokio::test]
async fn get_after_create_returns_the_created_record() {
  let s = MemoryStore::<Person>::new();
  let created = s.create(person("gh1906", &["New York"])).await.unwrap();
  let fetched = s.get(created.id).await.unwrap();
  assert_eq!(fetched, created);
}

// ─── Get / Delete ────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_unknown_id_is_not_found() {
  let s = MemoryStore::<Assignment>::new();
  let id = Uuid::new_v4();
  let err = s.get(id).await.unwrap_err();
  assert_eq!(err, Error::NotFound { resource: "Assignment", id });
}

#[tokio::test]
async fn delete_removes_and_get_then_fails() {
  let s = MemoryStore::<Course>::new();
  let c = s.create(cloud_computing()).await.unwrap();
  s.delete(c.id).await.unwrap();
  assert!(matches!(s.get(c.id).await, Err(Error::NotFound { .. })));
  assert!(s.is_empty().await);
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
  let s = MemoryStore::<Address>::new();
  let err = s.delete(Uuid::new_v4()).await.unwrap_err();
  assert!(matches!(err, Error::NotFound { resource: "Address", .. }));
}

#[tokio::test]
async fn deleted_address_id_may_be_supplied_again() {
  let s = MemoryStore::<Address>::new();
  let id = Uuid::new_v4();
  s.create(new_address(Some(id), "Boston")).await.unwrap();
  s.delete(id).await.unwrap();
  let again = s.create(new_address(Some(id), "Denver")).await.unwrap();
  assert_eq!(again.fields.city, "Denver");
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn course_credit_update_scenario() {
  let s = MemoryStore::<Course>::new();
  let created = s.create(cloud_computing()).await.unwrap();
  tick().await;

  let updated = s
    .update(created.id, CourseUpdate {
      credits: Patch::Set(4),
      ..Default::default()
    })
    .await
    .unwrap();

  assert_eq!(updated.id, created.id);
  assert_eq!(updated.fields.course_code, "COMS W4153");
  assert_eq!(updated.fields.credits, 4);
  assert_eq!(updated.created_at, created.created_at);
  assert!(updated.updated_at > updated.created_at);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
  let s = MemoryStore::<Course>::new();
  let err = s
    .update(Uuid::new_v4(), CourseUpdate::default())
    .await
    .unwrap_err();
  assert!(matches!(err, Error::NotFound { resource: "Course", .. }));
}

#[tokio::test]
async fn update_overwrites_with_empty_string() {
  let s = MemoryStore::<Person>::new();
  let p = s.create(person("gh1906", &[])).await.unwrap();
  let updated = s
    .update(p.id, PersonUpdate {
      first_name: Patch::Set(String::new()),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(updated.fields.first_name, "");
  assert_eq!(updated.fields.last_name, "Hopper");
}

#[tokio::test]
async fn update_ignores_a_smuggled_id() {
  let s = MemoryStore::<Address>::new();
  let a = s.create(new_address(None, "Boston")).await.unwrap();
  let other = Uuid::new_v4();
  let update: AddressUpdate =
    serde_json::from_str(&format!(r#"{{"id":"{other}","city":"Austin"}}"#))
      .unwrap();

  let updated = s.update(a.id, update).await.unwrap();
  assert_eq!(updated.id, a.id);
  assert_eq!(updated.fields.city, "Austin");
  assert!(s.get(other).await.is_err());
}

#[tokio::test]
async fn repeated_update_is_idempotent_but_advances_updated_at() {
  let s = MemoryStore::<Course>::new();
  let c = s.create(cloud_computing()).await.unwrap();
  let update = CourseUpdate {
    title: Patch::Set("Advanced Cloud Computing".into()),
    location: Patch::Set(Some("Mudd 233".into())),
    ..Default::default()
  };

  tick().await;
  let first = s.update(c.id, update.clone()).await.unwrap();
  tick().await;
  let second = s.update(c.id, update).await.unwrap();

  assert_eq!(first.fields, second.fields);
  assert!(second.updated_at >= first.updated_at);
  assert_eq!(second.created_at, c.created_at);
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_without_filter_returns_everything_in_insertion_order() {
  let s = MemoryStore::<Course>::new();
  let a = s.create(course("A", "X", 3)).await.unwrap();
  let b = s.create(course("B", "Y", 3)).await.unwrap();
  let c = s.create(course("C", "X", 4)).await.unwrap();

  let all = s.list(&CourseFilter::default()).await.unwrap();
  let ids: Vec<_> = all.iter().map(|r| r.id).collect();
  assert_eq!(ids, vec![a.id, b.id, c.id]);
}

#[tokio::test]
async fn insertion_order_survives_deletes_and_updates() {
  let s = MemoryStore::<Course>::new();
  let a = s.create(course("A", "X", 3)).await.unwrap();
  let b = s.create(course("B", "X", 3)).await.unwrap();
  let c = s.create(course("C", "X", 3)).await.unwrap();
  s.delete(b.id).await.unwrap();
  s.update(a.id, CourseUpdate {
    credits: Patch::Set(1),
    ..Default::default()
  })
  .await
  .unwrap();
  let d = s.create(course("D", "X", 3)).await.unwrap();

  let ids: Vec<_> = s
    .list(&CourseFilter::default())
    .await
    .unwrap()
    .into_iter()
    .map(|r| r.id)
    .collect();
  assert_eq!(ids, vec![a.id, c.id, d.id]);
}

#[tokio::test]
async fn list_filters_are_conjunctive() {
  let s = MemoryStore::<Course>::new();
  s.create(course("A", "Ferguson", 3)).await.unwrap();
  let hit = s.create(course("B", "Ferguson", 4)).await.unwrap();
  s.create(course("C", "Gravano", 4)).await.unwrap();

  let found = s
    .list(&CourseFilter {
      instructor: Some("Ferguson".into()),
      credits: Some(4),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(found.len(), 1);
  assert_eq!(found[0].id, hit.id);
}

#[tokio::test]
async fn list_with_no_match_is_empty_not_an_error() {
  let s = MemoryStore::<Address>::new();
  s.create(new_address(None, "Boston")).await.unwrap();
  let found = s
    .list(&AddressFilter {
      city: Some("boston".into()),
      ..Default::default()
    })
    .await
    .unwrap();
  assert!(found.is_empty());
}

#[tokio::test]
async fn list_persons_by_embedded_address_city() {
  let s = MemoryStore::<Person>::new();
  let both = s.create(person("a1", &["Boston", "Paris"])).await.unwrap();
  s.create(person("b2", &["Denver"])).await.unwrap();
  s.create(person("c3", &[])).await.unwrap();

  let found = s
    .list(&PersonFilter {
      city: Some("Paris".into()),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(found.len(), 1);
  assert_eq!(found[0].id, both.id);
}

#[tokio::test]
async fn birth_date_filter_skips_persons_without_a_birth_date() {
  let s = MemoryStore::<Person>::new();
  let dated = s.create(person("a1", &[])).await.unwrap();
  s.create(Person {
    birth_date: None,
    ..person("b2", &[])
  })
  .await
  .unwrap();

  let found = s
    .list(&PersonFilter {
      birth_date: Some("1906-12-09".into()),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(found.len(), 1);
  assert_eq!(found[0].id, dated.id);

  let none = s
    .list(&PersonFilter {
      birth_date: Some("None".into()),
      ..Default::default()
    })
    .await
    .unwrap();
  assert!(none.is_empty());
}

#[tokio::test]
async fn assignments_with_dangling_course_are_stored_and_filterable() {
  let s = MemoryStore::<Assignment>::new();
  let course_id = Uuid::new_v4();
  s.create(homework(course_id, "2025-09-15")).await.unwrap();
  s.create(homework(course_id, "2025-09-22")).await.unwrap();
  s.create(homework(Uuid::new_v4(), "2025-09-15")).await.unwrap();

  let by_course = s
    .list(&AssignmentFilter {
      course_id: Some(course_id),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(by_course.len(), 2);

  let due = s
    .list(&AssignmentFilter {
      course_id: Some(course_id),
      due_date: Some("2025-09-15".into()),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(due.len(), 1);
}

#[tokio::test]
async fn clones_share_the_same_collection() {
  let s = MemoryStore::<Course>::new();
  let other = s.clone();
  let c = s.create(cloud_computing()).await.unwrap();
  assert_eq!(other.get(c.id).await.unwrap(), c);
}
