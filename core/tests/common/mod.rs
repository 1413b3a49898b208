// tests/common/mod.rs
#![allow(dead_code)]

use once_cell::sync::Lazy;
use pos_admin::models::Role;
use pos_admin::testing::{logged_in_session, mock_client, MockTransport};
use pos_admin::{ApiClient, SessionContext};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::Level;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// Mock transport plus a client logged in with `role`.
pub fn logged_in(role: Role) -> (Arc<MockTransport>, ApiClient) {
  let mock = MockTransport::new();
  let session = logged_in_session(role).expect("in-memory session");
  let client = mock_client(&mock, session);
  (mock, client)
}

pub fn logged_out() -> (Arc<MockTransport>, ApiClient) {
  let mock = MockTransport::new();
  let client = mock_client(&mock, Arc::new(SessionContext::in_memory()));
  (mock, client)
}

// --- JSON fixtures as the API sends them ---

pub fn product_json(id: u64, name: &str, price: &str, stock: i64) -> Value {
  json!({
    "id": id,
    "name": name,
    "description": null,
    "price": price,
    "stock": stock,
    "sku": format!("SKU-{:03}", id),
    "isActive": true,
    "createdAt": "2024-03-01T12:00:00.000Z",
    "updatedAt": "2024-03-01T12:00:00.000Z"
  })
}

pub fn sale_json(id: u64, number: &str, total: &str, status: &str) -> Value {
  json!({
    "id": id,
    "saleNumber": number,
    "userId": "u-1",
    "total": total,
    "status": status,
    "saleDate": "2024-03-15T00:00:00.000Z",
    "createdAt": "2024-03-15T10:30:00.000Z",
    "updatedAt": "2024-03-15T10:30:00.000Z"
  })
}

pub fn user_json(id: &str, email: &str, role: &str) -> Value {
  json!({
    "id": id,
    "email": email,
    "name": "Ana Gómez",
    "role": role,
    "isActive": true,
    "createdAt": "2024-01-10T08:00:00.000Z"
  })
}
