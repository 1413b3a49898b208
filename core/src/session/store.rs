// pos_admin/src/session/store.rs

use crate::error::{PosError, PosResult};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What is persisted: the token and the raw profile JSON. The profile stays
/// untyped on disk so a damaged profile can be told apart from a missing one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
  #[serde(default)]
  pub token: Option<String>,
  #[serde(default)]
  pub user: Option<Value>,
}

pub trait SessionStore: Send + Sync {
  fn load(&self) -> PosResult<StoredSession>;
  fn save(&self, session: &StoredSession) -> PosResult<()>;
  fn clear(&self) -> PosResult<()>;
}

/// Keeps the session in a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
  path: PathBuf,
}

impl FileSessionStore {
  pub fn new<P: Into<PathBuf>>(path: P) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl SessionStore for FileSessionStore {
  fn load(&self) -> PosResult<StoredSession> {
    if !self.path.exists() {
      debug!(path = %self.path.display(), "No session file; starting logged out.");
      return Ok(StoredSession::default());
    }
    let raw = fs::read_to_string(&self.path)?;
    if raw.trim().is_empty() {
      return Ok(StoredSession::default());
    }
    match serde_json::from_str(&raw) {
      Ok(session) => Ok(session),
      Err(e) => {
        warn!(path = %self.path.display(), error = %e, "Session file is unreadable; starting logged out.");
        Ok(StoredSession::default())
      }
    }
  }

  fn save(&self, session: &StoredSession) -> PosResult<()> {
    if let Some(parent) = self.path.parent() {
      if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)?;
      }
    }
    let body = serde_json::to_string_pretty(session)
      .map_err(|e| PosError::Session(format!("could not serialize session: {}", e)))?;
    fs::write(&self.path, body)?;
    restrict_permissions(&self.path)?;
    debug!(path = %self.path.display(), "Session persisted.");
    Ok(())
  }

  fn clear(&self) -> PosResult<()> {
    match fs::remove_file(&self.path) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
      Err(e) => Err(e.into()),
    }
  }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> PosResult<()> {
  use std::os::unix::fs::PermissionsExt;
  fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
  Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> PosResult<()> {
  Ok(())
}

/// Process-local store, used by tests and one-shot tooling.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
  inner: Mutex<StoredSession>,
}

impl MemorySessionStore {
  pub fn new(initial: StoredSession) -> Self {
    Self {
      inner: Mutex::new(initial),
    }
  }
}

impl SessionStore for MemorySessionStore {
  fn load(&self) -> PosResult<StoredSession> {
    Ok(self.inner.lock().clone())
  }

  fn save(&self, session: &StoredSession) -> PosResult<()> {
    *self.inner.lock() = session.clone();
    Ok(())
  }

  fn clear(&self) -> PosResult<()> {
    *self.inner.lock() = StoredSession::default();
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn file_store_round_trip_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));

    assert_eq!(store.load().unwrap(), StoredSession::default());

    let session = StoredSession {
      token: Some("tok-123".to_string()),
      user: Some(json!({ "id": "u1", "email": "a@b.co" })),
    };
    store.save(&session).unwrap();
    assert_eq!(store.load().unwrap(), session);

    store.clear().unwrap();
    assert!(!store.path().exists());
    store.clear().unwrap();
  }

  #[test]
  fn corrupt_file_loads_as_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, "{not json").unwrap();
    let store = FileSessionStore::new(&path);
    assert_eq!(store.load().unwrap(), StoredSession::default());
  }
}
