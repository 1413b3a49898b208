// pos_admin_console/src/state.rs
use crate::config::AppConfig;
use crate::errors::Result;
use pos_admin::{ApiClient, FileSessionStore, SessionContext};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub config: Arc<AppConfig>,
  pub client: ApiClient,
}

impl AppState {
  /// Loads the persisted session and builds the reqwest-backed client.
  pub fn from_config(config: AppConfig) -> Result<Self> {
    let session = SessionContext::load(FileSessionStore::new(&config.session_file))?;
    let client = ApiClient::with_reqwest(&config.api_base_url, config.api_timeout, Arc::new(session))?;
    Ok(Self::with_client(config, client))
  }

  pub fn with_client(config: AppConfig, client: ApiClient) -> Self {
    Self {
      config: Arc::new(config),
      client,
    }
  }

  pub fn session(&self) -> &Arc<SessionContext> {
    self.client.session()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pos_admin::models::Role;
  use pos_admin::testing::session_user;

  #[test]
  fn state_picks_up_persisted_session() {
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");
    {
      let session = SessionContext::load(FileSessionStore::new(&session_file)).unwrap();
      session.establish("tok-disk", &session_user(Role::Admin)).unwrap();
    }

    let mut config = AppConfig::from_lookup(|_| None).unwrap();
    config.session_file = session_file;
    let state = AppState::from_config(config).unwrap();

    assert_eq!(state.session().token().as_deref(), Some("tok-disk"));
    assert!(state.session().current_user().unwrap().is_admin());
  }
}
