// pos_admin/src/http/client.rs

use super::reqwest_transport::ReqwestTransport;
use super::transport::{ApiRequest, ApiResponse, HttpMethod, Transport};
use crate::error::{PosError, PosResult};
use crate::session::SessionContext;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Session-aware API client.
///
/// Attaches `Authorization: Bearer <token>` when a token is stored. Any 401
/// clears the session before `PosError::Unauthorized` is returned.
#[derive(Clone)]
pub struct ApiClient {
  transport: Arc<dyn Transport>,
  session: Arc<SessionContext>,
}

impl ApiClient {
  pub fn new(transport: Arc<dyn Transport>, session: Arc<SessionContext>) -> Self {
    Self { transport, session }
  }

  pub fn with_reqwest(base_url: &str, timeout: Duration, session: Arc<SessionContext>) -> PosResult<Self> {
    let transport = ReqwestTransport::new(base_url, timeout)?;
    Ok(Self::new(Arc::new(transport), session))
  }

  pub fn session(&self) -> &Arc<SessionContext> {
    &self.session
  }

  pub async fn get(&self, path: &str) -> PosResult<Value> {
    self.send(HttpMethod::Get, path, &[], None).await
  }

  pub async fn get_with_query(&self, path: &str, query: &[(&str, &str)]) -> PosResult<Value> {
    self.send(HttpMethod::Get, path, query, None).await
  }

  pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> PosResult<Value> {
    let body = serde_json::to_value(body)?;
    self.send(HttpMethod::Post, path, &[], Some(body)).await
  }

  pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> PosResult<Value> {
    let body = serde_json::to_value(body)?;
    self.send(HttpMethod::Put, path, &[], Some(body)).await
  }

  pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: Option<&B>) -> PosResult<Value> {
    let body = body.map(serde_json::to_value).transpose()?;
    self.send(HttpMethod::Patch, path, &[], body).await
  }

  pub async fn delete(&self, path: &str) -> PosResult<Value> {
    self.send(HttpMethod::Delete, path, &[], None).await
  }

  /// POST without the stored token, for login. A 401 here means bad
  /// credentials and leaves the current session alone.
  pub async fn post_public<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> PosResult<Value> {
    let mut request = ApiRequest::new(HttpMethod::Post, path);
    request.body = Some(serde_json::to_value(body)?);
    let response = self.transport.send(request).await?;
    if response.is_success() {
      return Ok(response.body);
    }
    Err(api_error(&response))
  }

  pub async fn send(
    &self,
    method: HttpMethod,
    path: &str,
    query: &[(&str, &str)],
    body: Option<Value>,
  ) -> PosResult<Value> {
    let request = ApiRequest {
      method,
      path: path.to_string(),
      query: query.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
      body,
      bearer: self.session.token(),
    };

    let response = self.transport.send(request).await?;
    if response.is_success() {
      debug!(%method, path, status = response.status, "Request succeeded.");
      return Ok(response.body);
    }

    if response.status == 401 {
      warn!(%method, path, "API answered 401; clearing stored credentials.");
      if let Err(e) = self.session.clear() {
        warn!(error = %e, "Stored credentials could not be removed after 401.");
      }
      return Err(PosError::Unauthorized);
    }

    Err(api_error(&response))
  }
}

/// Maps a non-2xx response to an error, taking the message from the body's
/// `message` or `error` field when present.
pub(crate) fn api_error(response: &ApiResponse) -> PosError {
  let message = error_message(&response.body).unwrap_or_else(|| {
    reqwest::StatusCode::from_u16(response.status)
      .ok()
      .and_then(|s| s.canonical_reason())
      .unwrap_or("request failed")
      .to_string()
  });
  if response.status == 404 {
    return PosError::NotFound(message);
  }
  PosError::Api {
    status: response.status,
    message,
  }
}

fn error_message(body: &Value) -> Option<String> {
  match body {
    Value::Object(map) => ["message", "error"]
      .iter()
      .filter_map(|key| map.get(*key))
      .find_map(|v| match v {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(inner) => inner.get("message").and_then(Value::as_str).map(str::to_string),
        _ => None,
      }),
    Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn error_messages_prefer_message_then_error() {
    let resp = ApiResponse::new(400, json!({ "message": "Stock insuficiente", "error": "Bad Request" }));
    match api_error(&resp) {
      PosError::Api { status, message } => {
        assert_eq!(status, 400);
        assert_eq!(message, "Stock insuficiente");
      }
      other => panic!("unexpected {:?}", other),
    }

    let resp = ApiResponse::new(409, json!({ "error": "Email ya registrado" }));
    assert!(matches!(api_error(&resp), PosError::Api { message, .. } if message == "Email ya registrado"));
  }

  #[test]
  fn missing_message_falls_back_to_reason() {
    let resp = ApiResponse::new(500, Value::Null);
    assert!(matches!(api_error(&resp), PosError::Api { message, .. } if message == "Internal Server Error"));

    let resp = ApiResponse::new(404, json!({}));
    assert!(matches!(api_error(&resp), PosError::NotFound(m) if m == "Not Found"));
  }
}
