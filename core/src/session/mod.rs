// pos_admin/src/session/mod.rs

//! The explicit session context: bearer token plus the serialized profile of
//! the logged-in user, persisted between console invocations.

pub mod context;
pub mod store;

pub use context::{ProfileState, SessionContext};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, StoredSession};

/// Shortened token for log lines.
pub fn token_hint(token: &str) -> String {
  let prefix: String = token.chars().take(8).collect();
  format!("{}…", prefix)
}
