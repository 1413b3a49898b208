// pos_admin_console/src/errors.rs

use pos_admin::{PosError, Route};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
  /// The session guard sent the user elsewhere before any request was made.
  #[error("Access denied: go to {to}")]
  Redirected { to: Route },

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Invalid input: {0}")]
  Input(String),

  #[error(transparent)]
  Core(#[from] PosError),

  #[error("I/O Error: {0}")]
  Io(#[from] std::io::Error),
}

impl ConsoleError {
  /// Process exit status for this error.
  pub fn exit_code(&self) -> u8 {
    match self {
      ConsoleError::Redirected { .. } => 3,
      ConsoleError::Core(PosError::Unauthorized) => 3,
      ConsoleError::Input(_) => 2,
      ConsoleError::Core(e) if e.is_client_side() => 2,
      ConsoleError::Core(PosError::NotFound(_)) => 4,
      ConsoleError::Core(PosError::Transport(_)) => 69,
      ConsoleError::Core(_) => 1,
      ConsoleError::Config(_) => 78,
      ConsoleError::Io(_) => 74,
    }
  }

  /// Screen the user should go to next, if the error implies one.
  pub fn next_route(&self) -> Option<Route> {
    match self {
      ConsoleError::Redirected { to } => Some(to.clone()),
      ConsoleError::Core(PosError::Unauthorized) => Some(Route::Login),
      _ => None,
    }
  }
}

impl From<ConsoleError> for ExitCode {
  fn from(err: ConsoleError) -> Self {
    ExitCode::from(err.exit_code())
  }
}

impl From<anyhow::Error> for ConsoleError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<ConsoleError>() {
      Ok(console_err) => console_err,
      Err(other) => ConsoleError::Core(PosError::from(other)),
    }
  }
}

pub type Result<T, E = ConsoleError> = std::result::Result<T, E>;
