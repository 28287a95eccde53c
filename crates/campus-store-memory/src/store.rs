//! [`MemoryStore`] — the in-memory implementation of [`ResourceStore`].

use std::{
  collections::{BTreeMap, HashMap},
  sync::Arc,
};

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use campus_core::{Error, Record, Resource, Result, store::ResourceStore};

// ─── Collection ──────────────────────────────────────────────────────────────

/// Records keyed by insertion sequence, plus an index from identifier to
/// sequence. Iterating `records` yields insertion order.
struct Collection<R> {
  records:  BTreeMap<u64, Record<R>>,
  index:    HashMap<Uuid, u64>,
  next_seq: u64,
}

impl<R> Default for Collection<R> {
  fn default() -> Self {
    Self {
      records:  BTreeMap::new(),
      index:    HashMap::new(),
      next_seq: 0,
    }
  }
}

impl<R> Collection<R> {
  fn fresh_id(&self) -> Uuid {
    loop {
      let id = Uuid::new_v4();
      if !self.index.contains_key(&id) {
        return id;
      }
    }
  }

  fn insert(&mut self, record: Record<R>) {
    let seq = self.next_seq;
    self.next_seq += 1;
    self.index.insert(record.id, seq);
    self.records.insert(seq, record);
  }

  fn get_mut(&mut self, id: Uuid) -> Option<&mut Record<R>> {
    let seq = self.index.get(&id)?;
    self.records.get_mut(seq)
  }

  fn remove(&mut self, id: Uuid) -> Option<Record<R>> {
    let seq = self.index.remove(&id)?;
    self.records.remove(&seq)
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// An in-memory collection of `R` records.
///
/// Cloning is cheap — clones share the same underlying collection.
pub struct MemoryStore<R: Resource> {
  inner: Arc<RwLock<Collection<R>>>,
}

impl<R: Resource> MemoryStore<R> {
  pub fn new() -> Self {
    Self {
      inner: Arc::new(RwLock::new(Collection::default())),
    }
  }

  /// Number of live records.
  pub async fn len(&self) -> usize { self.inner.read().await.records.len() }

  pub async fn is_empty(&self) -> bool { self.len().await == 0 }
}

impl<R: Resource> Default for MemoryStore<R> {
  fn default() -> Self { Self::new() }
}

impl<R: Resource> Clone for MemoryStore<R> {
  fn clone(&self) -> Self {
    Self {
      inner: Arc::clone(&self.inner),
    }
  }
}

impl<R: Resource> ResourceStore<R> for MemoryStore<R> {
  async fn create(&self, input: R::Create) -> Result<Record<R>> {
    let requested = R::requested_id(&input);
    let fields = R::from_create(input);

    let mut collection = self.inner.write().await;
    let id = match requested {
      Some(id) if collection.index.contains_key(&id) => {
        return Err(Error::conflict::<R>(id));
      }
      Some(id) => id,
      None => collection.fresh_id(),
    };

    let record = Record::new(id, fields, Utc::now());
    collection.insert(record.clone());
    Ok(record)
  }

  async fn list(&self, filter: &R::Filter) -> Result<Vec<Record<R>>> {
    let collection = self.inner.read().await;
    Ok(
      collection
        .records
        .values()
        .filter(|r| r.fields.matches(filter))
        .cloned()
        .collect(),
    )
  }

  async fn get(&self, id: Uuid) -> Result<Record<R>> {
    let collection = self.inner.read().await;
    collection
      .index
      .get(&id)
      .and_then(|seq| collection.records.get(seq))
      .cloned()
      .ok_or_else(|| Error::not_found::<R>(id))
  }

  async fn update(&self, id: Uuid, update: R::Update) -> Result<Record<R>> {
    let mut collection = self.inner.write().await;
    let record = collection
      .get_mut(id)
      .ok_or_else(|| Error::not_found::<R>(id))?;
    record.fields.apply(update);
    record.touch(Utc::now());
    Ok(record.clone())
  }

  async fn delete(&self, id: Uuid) -> Result<()> {
    let mut collection = self.inner.write().await;
    collection
      .remove(id)
      .map(drop)
      .ok_or_else(|| Error::not_found::<R>(id))
  }
}
