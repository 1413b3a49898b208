// pos_admin_console/src/config.rs

use crate::errors::{ConsoleError, Result};
use dotenvy::dotenv;
use pos_admin::services::auth_service::DEFAULT_LOGIN_PATH;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
  pub api_base_url: String,
  pub api_timeout: Duration,
  pub login_path: String,
  pub session_file: PathBuf,
  pub log_json: bool,
}

impl AppConfig {
  /// Reads `POS_*` variables, after loading a `.env` file if one exists.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    Self::from_lookup(|name| env::var(name).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_env = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let api_base_url = get_env("POS_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
      return Err(ConsoleError::Config(format!(
        "Invalid POS_API_BASE_URL '{}': expected an http(s) URL",
        api_base_url
      )));
    }

    let timeout_secs = match get_env("POS_API_TIMEOUT_SECS") {
      Some(raw) => raw
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .ok_or_else(|| ConsoleError::Config(format!("Invalid POS_API_TIMEOUT_SECS '{}'", raw)))?,
      None => DEFAULT_TIMEOUT_SECS,
    };

    let login_path = get_env("POS_LOGIN_PATH").unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string());
    if !login_path.starts_with('/') {
      return Err(ConsoleError::Config(format!(
        "Invalid POS_LOGIN_PATH '{}': must start with '/'",
        login_path
      )));
    }

    let session_file = match get_env("POS_SESSION_FILE") {
      Some(path) => PathBuf::from(path),
      None => default_session_file(get_env("HOME")),
    };

    let log_json = match get_env("POS_LOG_JSON") {
      Some(raw) => raw
        .parse::<bool>()
        .map_err(|e| ConsoleError::Config(format!("Invalid POS_LOG_JSON value: {}", e)))?,
      None => false,
    };

    Ok(Self {
      api_base_url: api_base_url.trim_end_matches('/').to_string(),
      api_timeout: Duration::from_secs(timeout_secs),
      login_path,
      session_file,
      log_json,
    })
  }
}

fn default_session_file(home: Option<String>) -> PathBuf {
  let base = home.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
  base.join(".pos-admin").join("session.json")
}
