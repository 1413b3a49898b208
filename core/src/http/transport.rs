// pos_admin/src/http/transport.rs

use crate::error::PosResult;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
  Get,
  Post,
  Put,
  Patch,
  Delete,
}

impl HttpMethod {
  pub fn as_str(&self) -> &'static str {
    match self {
      HttpMethod::Get => "GET",
      HttpMethod::Post => "POST",
      HttpMethod::Put => "PUT",
      HttpMethod::Patch => "PATCH",
      HttpMethod::Delete => "DELETE",
    }
  }
}

impl fmt::Display for HttpMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One request, relative to the API base path.
#[derive(Clone, PartialEq)]
pub struct ApiRequest {
  pub method: HttpMethod,
  pub path: String,
  pub query: Vec<(String, String)>,
  pub body: Option<Value>,
  pub bearer: Option<String>,
}

impl ApiRequest {
  pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
    Self {
      method,
      path: path.into(),
      query: Vec::new(),
      body: None,
      bearer: None,
    }
  }
}

impl fmt::Debug for ApiRequest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ApiRequest")
      .field("method", &self.method)
      .field("path", &self.path)
      .field("query", &self.query)
      .field("has_body", &self.body.is_some())
      .field("bearer", &self.bearer.as_ref().map(|_| "[REDACTED]"))
      .finish()
  }
}

/// Status plus the decoded body. An empty body is `Value::Null`; a body that
/// is not JSON is carried as `Value::String`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
  pub status: u16,
  pub body: Value,
}

impl ApiResponse {
  pub fn new(status: u16, body: Value) -> Self {
    Self { status, body }
  }

  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

/// Sends requests to the API. Implemented over reqwest for real use and by
/// an in-memory recorder in tests.
#[async_trait]
pub trait Transport: Send + Sync {
  async fn send(&self, request: ApiRequest) -> PosResult<ApiResponse>;
}
