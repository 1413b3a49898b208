// pos_admin/src/http/mod.rs

//! HTTP plumbing: the transport seam, its reqwest implementation and the
//! session-aware `ApiClient` every service goes through.

pub mod client;
pub mod reqwest_transport;
pub mod transport;

pub use client::ApiClient;
pub use reqwest_transport::ReqwestTransport;
pub use transport::{ApiRequest, ApiResponse, HttpMethod, Transport};

/// Percent-encodes one path segment (ids, category names).
pub fn encode_segment(segment: &str) -> String {
  let mut out = String::with_capacity(segment.len());
  for byte in segment.bytes() {
    match byte {
      b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(byte as char),
      _ => out.push_str(&format!("%{:02X}", byte)),
    }
  }
  out
}
