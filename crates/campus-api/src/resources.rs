//! Generic handlers shared by every resource collection.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/{collection}` | Query params map to the resource's filter |
//! | `POST`   | `/{collection}` | Returns 201 + stored record |
//! | `GET`    | `/{collection}/{id}` | 404 if not found |
//! | `PATCH`  | `/{collection}/{id}` | Only supplied keys change |
//! | `DELETE` | `/{collection}/{id}` | Only when enabled with [`ResourceRoutes::with_delete`]; 204 |

use std::{marker::PhantomData, sync::Arc};

use axum::{
  Json, Router,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
  routing::get,
};
use campus_core::{Record, Resource, store::ResourceStore};
use uuid::Uuid;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /{collection}[?field=value...]`
pub async fn list<R, S>(
  State(store): State<Arc<S>>,
  Query(filter): Query<R::Filter>,
) -> Result<Json<Vec<Record<R>>>, ApiError>
where
  R: Resource,
  S: ResourceStore<R>,
{
  let records = store.list(&filter).await?;
  Ok(Json(records))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /{collection}` — returns 201 + the stored [`Record`].
pub async fn create<R, S>(
  State(store): State<Arc<S>>,
  Json(body): Json<R::Create>,
) -> Result<impl IntoResponse, ApiError>
where
  R: Resource,
  S: ResourceStore<R>,
{
  let record = store.create(body).await?;
  tracing::info!(resource = R::NAME, id = %record.id, "created");
  Ok((StatusCode::CREATED, Json(record)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /{collection}/{id}`
pub async fn get_one<R, S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Record<R>>, ApiError>
where
  R: Resource,
  S: ResourceStore<R>,
{
  Ok(Json(store.get(id).await?))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /{collection}/{id}` — body is the resource's partial update.
pub async fn update<R, S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<R::Update>,
) -> Result<Json<Record<R>>, ApiError>
where
  R: Resource,
  S: ResourceStore<R>,
{
  let record = store.update(id, body).await?;
  tracing::debug!(resource = R::NAME, %id, "updated");
  Ok(Json(record))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /{collection}/{id}` — 204 with an empty body.
pub async fn delete_one<R, S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  R: Resource,
  S: ResourceStore<R>,
{
  store.delete(id).await?;
  tracing::info!(resource = R::NAME, %id, "deleted");
  Ok(StatusCode::NO_CONTENT)
}

// ─── Routes ───────────────────────────────────────────────────────────────────

/// Builds the router for one resource collection, mounted at
/// `/{R::COLLECTION}`.
pub struct ResourceRoutes<R, S> {
  store:     Arc<S>,
  delete:    bool,
  _resource: PhantomData<fn() -> R>,
}

impl<R, S> ResourceRoutes<R, S>
where
  R: Resource,
  S: ResourceStore<R> + 'static,
{
  /// Create, list, get and update; no delete.
  pub fn new(store: Arc<S>) -> Self {
    Self {
      store,
      delete: false,
      _resource: PhantomData,
    }
  }

  /// Also expose `DELETE /{collection}/{id}`.
  pub fn with_delete(mut self) -> Self {
    self.delete = true;
    self
  }

  /// The returned `Router<()>` can be merged into any parent router
  /// regardless of its own state type.
  pub fn into_router(self) -> Router<()> {
    let collection = format!("/{}", R::COLLECTION);
    let item = format!("/{}/{{id}}", R::COLLECTION);

    let mut item_routes = get(get_one::<R, S>).patch(update::<R, S>);
    if self.delete {
      item_routes = item_routes.delete(delete_one::<R, S>);
    }

    Router::new()
      .route(&collection, get(list::<R, S>).post(create::<R, S>))
      .route(&item, item_routes)
      .with_state(self.store)
  }
}
