// pos_admin/src/error.rs
use crate::forms::FieldErrors;
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PosError {
  /// A client-side rule rejected the input before any request was made.
  #[error("Validation error: {0}")]
  Validation(String),

  /// One or more form fields failed validation.
  #[error("Invalid form: {0}")]
  InvalidForm(FieldErrors),

  /// The API answered 401. Stored credentials have already been cleared.
  #[error("Not authenticated: log in again")]
  Unauthorized,

  #[error("API error (HTTP {status}): {message}")]
  Api { status: u16, message: String },

  #[error("Resource not found: {0}")]
  NotFound(String),

  #[error("Transport error: {0}")]
  Transport(String),

  #[error("Could not decode API response: {0}")]
  Decode(String),

  #[error("Session store error: {0}")]
  Session(String),

  #[error("Flow step '{step}' failed: {message}")]
  Flow { step: String, message: String },

  #[error("Internal error: {0}")]
  Internal(String),
}

impl PosError {
  /// True for errors raised locally, before anything was sent.
  pub fn is_client_side(&self) -> bool {
    matches!(self, PosError::Validation(_) | PosError::InvalidForm(_))
  }
}

impl From<serde_json::Error> for PosError {
  fn from(err: serde_json::Error) -> Self {
    PosError::Decode(err.to_string())
  }
}

impl From<reqwest::Error> for PosError {
  fn from(err: reqwest::Error) -> Self {
    if err.is_timeout() {
      return PosError::Transport(format!("request timed out: {}", err));
    }
    if err.is_decode() {
      return PosError::Decode(err.to_string());
    }
    PosError::Transport(err.to_string())
  }
}

impl From<std::io::Error> for PosError {
  fn from(err: std::io::Error) -> Self {
    PosError::Session(err.to_string())
  }
}

impl From<AnyhowError> for PosError {
  fn from(err: AnyhowError) -> Self {
    match err.downcast::<PosError>() {
      Ok(pos_err) => pos_err,
      Err(other) => PosError::Internal(other.to_string()),
    }
  }
}

pub type PosResult<T, E = PosError> = std::result::Result<T, E>;
