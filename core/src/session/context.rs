// pos_admin/src/session/context.rs

use super::store::{MemorySessionStore, SessionStore, StoredSession};
use super::token_hint;
use crate::error::PosResult;
use crate::models::SessionUser;
use parking_lot::RwLock;
use serde_json::Value;
use std::fmt;
use tracing::{info, warn};

/// Result of reading the stored profile.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileState {
  Missing,
  Malformed(String),
  Present(SessionUser),
}

/// Session shared by the HTTP client and the route guard.
///
/// Only `establish` (login) and `clear` (logout, 401) change it; every other
/// component reads.
pub struct SessionContext {
  store: Box<dyn SessionStore>,
  state: RwLock<StoredSession>,
}

impl SessionContext {
  /// Loads the persisted session from `store`.
  pub fn load<S: SessionStore + 'static>(store: S) -> PosResult<Self> {
    let state = store.load()?;
    Ok(Self {
      store: Box::new(store),
      state: RwLock::new(state),
    })
  }

  /// A logged-out session that lives only in this process.
  pub fn in_memory() -> Self {
    Self {
      store: Box::new(MemorySessionStore::default()),
      state: RwLock::new(StoredSession::default()),
    }
  }

  pub fn token(&self) -> Option<String> {
    self.state.read().token.clone().filter(|t| !t.is_empty())
  }

  pub fn is_authenticated(&self) -> bool {
    self.token().is_some()
  }

  pub fn profile(&self) -> ProfileState {
    let raw = match self.state.read().user.clone() {
      Some(raw) => raw,
      None => return ProfileState::Missing,
    };
    match serde_json::from_value::<SessionUser>(raw) {
      Ok(user) => ProfileState::Present(user),
      Err(e) => ProfileState::Malformed(e.to_string()),
    }
  }

  pub fn current_user(&self) -> Option<SessionUser> {
    match self.profile() {
      ProfileState::Present(user) => Some(user),
      _ => None,
    }
  }

  /// Stores a fresh login.
  pub fn establish(&self, token: &str, user: &SessionUser) -> PosResult<()> {
    let profile = serde_json::to_value(user)?;
    self.establish_raw(token, Some(profile))
  }

  /// Stores a token with an arbitrary profile payload, exactly as received.
  pub fn establish_raw(&self, token: &str, user: Option<Value>) -> PosResult<()> {
    let next = StoredSession {
      token: Some(token.to_string()),
      user,
    };
    self.store.save(&next)?;
    *self.state.write() = next;
    info!(token = %token_hint(token), "Session established.");
    Ok(())
  }

  /// Forgets the token and profile, in memory and on disk.
  pub fn clear(&self) -> PosResult<()> {
    *self.state.write() = StoredSession::default();
    if let Err(e) = self.store.clear() {
      warn!(error = %e, "Could not remove persisted session.");
      return Err(e);
    }
    info!("Session cleared.");
    Ok(())
  }
}

impl fmt::Debug for SessionContext {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SessionContext")
      .field("authenticated", &self.is_authenticated())
      .finish()
  }
}
