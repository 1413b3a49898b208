// pos_admin/src/http/reqwest_transport.rs

use super::transport::{ApiRequest, ApiResponse, HttpMethod, Transport};
use crate::error::PosResult;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Method;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
  client: reqwest::Client,
  base_url: String,
}

impl ReqwestTransport {
  pub fn new(base_url: &str, timeout: Duration) -> PosResult<Self> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    Ok(Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
    })
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  fn url_for(&self, path: &str) -> String {
    format!("{}/{}", self.base_url, path.trim_start_matches('/'))
  }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
  match method {
    HttpMethod::Get => Method::GET,
    HttpMethod::Post => Method::POST,
    HttpMethod::Put => Method::PUT,
    HttpMethod::Patch => Method::PATCH,
    HttpMethod::Delete => Method::DELETE,
  }
}

fn decode_body(bytes: &[u8]) -> Value {
  if bytes.iter().all(|b| b.is_ascii_whitespace()) {
    return Value::Null;
  }
  serde_json::from_slice(bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

#[async_trait]
impl Transport for ReqwestTransport {
  #[instrument(name = "ReqwestTransport::send", skip_all, fields(method = %request.method, path = %request.path), err(Display))]
  async fn send(&self, request: ApiRequest) -> PosResult<ApiResponse> {
    let mut builder = self
      .client
      .request(to_reqwest_method(request.method), self.url_for(&request.path))
      .header(ACCEPT, "application/json");

    if !request.query.is_empty() {
      builder = builder.query(&request.query);
    }
    if let Some(token) = &request.bearer {
      builder = builder.bearer_auth(token);
    }
    if let Some(body) = &request.body {
      builder = builder.json(body);
    }

    let response = builder.send().await?;
    let status = response.status().as_u16();
    let bytes = response.bytes().await?;
    debug!(status, body_len = bytes.len(), "Response received.");

    Ok(ApiResponse::new(status, decode_body(&bytes)))
  }
}
