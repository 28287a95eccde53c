//! Handlers for `/`, `/health` and `/health/{path_echo}`.
//!
//! These carry no domain state. The health payload reports the address the
//! server's host name resolved to at start-up, and echoes back the optional
//! `echo` query parameter and the path segment verbatim.

use std::{
  net::{IpAddr, Ipv4Addr},
  sync::Arc,
};

use axum::{
  Json, Router,
  extract::{Path, Query, State},
  routing::get,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

// ─── Host info ───────────────────────────────────────────────────────────────

/// Facts about the serving host, resolved once and shared by the handlers.
#[derive(Debug, Clone)]
pub struct HostInfo {
  pub ip_address: IpAddr,
}

impl HostInfo {
  /// Resolve this machine's host name to a network address, preferring IPv4.
  /// Falls back to loopback if the name cannot be resolved.
  pub async fn resolve() -> Self {
    let name = host_name();
    let ip_address = match tokio::net::lookup_host((name.as_str(), 0)).await {
      Ok(addrs) => {
        let addrs: Vec<IpAddr> = addrs.map(|a| a.ip()).collect();
        addrs
          .iter()
          .find(|ip| ip.is_ipv4())
          .or_else(|| addrs.first())
          .copied()
      }
      Err(e) => {
        tracing::warn!(host = %name, error = %e, "failed to resolve host name");
        None
      }
    };
    Self {
      ip_address: ip_address.unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
    }
  }
}

/// The machine's host name as reported by the OS, or `localhost` if empty.
fn host_name() -> String {
  let name = gethostname::gethostname();
  let name = name.to_string_lossy();
  let name = name.trim();
  if name.is_empty() {
    "localhost".to_string()
  } else {
    name.to_string()
  }
}

// ─── Health ──────────────────────────────────────────────────────────────────

/// Body returned by the health endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
  pub status:         u16,
  pub status_message: String,
  /// RFC 3339 UTC instant, always `Z`-suffixed.
  pub timestamp:      String,
  pub ip_address:     IpAddr,
  pub echo:           Option<String>,
  pub path_echo:      Option<String>,
}

impl Health {
  pub fn ok(
    host: &HostInfo,
    echo: Option<String>,
    path_echo: Option<String>,
  ) -> Self {
    Self {
      status: 200,
      status_message: "OK".to_string(),
      timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
      ip_address: host.ip_address,
      echo,
      path_echo,
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct EchoParams {
  pub echo: Option<String>,
}

/// `GET /health[?echo=...]`
pub async fn health(
  State(host): State<Arc<HostInfo>>,
  Query(params): Query<EchoParams>,
) -> Json<Health> {
  Json(Health::ok(&host, params.echo, None))
}

/// `GET /health/{path_echo}[?echo=...]`
pub async fn health_with_path(
  State(host): State<Arc<HostInfo>>,
  Path(path_echo): Path<String>,
  Query(params): Query<EchoParams>,
) -> Json<Health> {
  Json(Health::ok(&host, params.echo, Some(path_echo)))
}

// ─── Root ────────────────────────────────────────────────────────────────────

/// `GET /`
pub async fn root() -> Json<Value> {
  Json(json!({
    "message": "Welcome to the Person/Address/Course/Assignment API. \
                Collections: /persons, /addresses, /courses, /assignments."
  }))
}

/// Router for the informational endpoints.
pub fn meta_router(host: HostInfo) -> Router<()> {
  Router::new()
    .route("/", get(root))
    .route("/health", get(health))
    .route("/health/{path_echo}", get(health_with_path))
    .with_state(Arc::new(host))
}
