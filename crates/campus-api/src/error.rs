//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0} not found")]
  NotFound(&'static str),

  /// Reported as 400 Bad Request.
  #[error("{0} with this ID already exists")]
  Conflict(&'static str),
}

impl From<campus_core::Error> for ApiError {
  fn from(e: campus_core::Error) -> Self {
    match e {
      campus_core::Error::NotFound { resource, .. } => Self::NotFound(resource),
      campus_core::Error::Conflict { resource, .. } => Self::Conflict(resource),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
    };
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
