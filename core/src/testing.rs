// pos_admin/src/testing.rs

//! Test doubles: a recording in-memory transport and a few fixtures.
//! Available to this crate's tests and, through the `test-util` feature, to
//! dependents.

use crate::error::PosResult;
use crate::http::{ApiClient, ApiRequest, ApiResponse, HttpMethod, Transport};
use crate::models::{Product, Role, SessionUser};
use crate::session::SessionContext;
use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

/// Serves canned responses keyed by method and path, and records every
/// request it sees.
///
/// A route with a single queued response keeps answering with it; longer
/// queues are consumed in order.
#[derive(Debug, Default)]
pub struct MockTransport {
  routes: Mutex<HashMap<(HttpMethod, String), VecDeque<ApiResponse>>>,
  requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
  pub fn new() -> Arc<Self> {
    Arc::new(Self::default())
  }

  pub fn on(&self, method: HttpMethod, path: &str, status: u16, body: Value) -> &Self {
    self
      .routes
      .lock()
      .entry((method, path.to_string()))
      .or_default()
      .push_back(ApiResponse::new(status, body));
    self
  }

  pub fn requests(&self) -> Vec<ApiRequest> {
    self.requests.lock().clone()
  }

  pub fn request_count(&self) -> usize {
    self.requests.lock().len()
  }

  pub fn last_request(&self) -> Option<ApiRequest> {
    self.requests.lock().last().cloned()
  }
}

#[async_trait]
impl Transport for MockTransport {
  async fn send(&self, request: ApiRequest) -> PosResult<ApiResponse> {
    let key = (request.method, request.path.clone());
    self.requests.lock().push(request);

    let mut routes = self.routes.lock();
    let response = match routes.get_mut(&key) {
      Some(queue) if queue.len() > 1 => queue.pop_front(),
      Some(queue) => queue.front().cloned(),
      None => None,
    };
    Ok(response.unwrap_or_else(|| {
      ApiResponse::new(404, json!({ "message": format!("no mock route for {} {}", key.0, key.1) }))
    }))
  }
}

/// A client over `mock` and `session`.
pub fn mock_client(mock: &Arc<MockTransport>, session: Arc<SessionContext>) -> ApiClient {
  let transport: Arc<dyn Transport> = mock.clone();
  ApiClient::new(transport, session)
}

/// An in-memory session already logged in with `role`.
pub fn logged_in_session(role: Role) -> PosResult<Arc<SessionContext>> {
  let session = SessionContext::in_memory();
  session.establish("test-token", &session_user(role))?;
  Ok(Arc::new(session))
}

pub fn session_user(role: Role) -> SessionUser {
  SessionUser {
    id: "u-1".to_string(),
    email: "admin@tienda.co".to_string(),
    name: Some("Administrador".to_string()),
    role: Some(role),
  }
}

pub fn product_fixture(id: &str, name: &str, price: Decimal) -> Product {
  Product {
    id: id.to_string(),
    name: name.to_string(),
    description: None,
    price,
    stock: 10,
    sku: None,
    is_active: true,
    created_at: None,
    updated_at: None,
  }
}
