// pos_admin_console/src/screens/auth.rs

use super::require;
use crate::errors::Result;
use crate::render::navigate;
use crate::state::AppState;
use pos_admin::services::auth_service;
use pos_admin::workflows::sign_in;
use pos_admin::{ProfileState, Route};
use std::io::Write;
use tracing::info;

pub async fn login(state: &AppState, email: &str, password: &str, out: &mut dyn Write) -> Result<()> {
  require(state, &Route::Login)?;
  let user = sign_in(&state.client, &state.config.login_path, email, password).await?;
  info!(user_id = %user.id, "Login complete.");
  writeln!(out, "Welcome, {}.", user.display_name())?;
  navigate(out, &Route::Dashboard)?;
  Ok(())
}

pub fn logout(state: &AppState, out: &mut dyn Write) -> Result<()> {
  auth_service::logout(&state.client)?;
  writeln!(out, "Session closed.")?;
  navigate(out, &Route::Login)?;
  Ok(())
}

pub fn whoami(state: &AppState, out: &mut dyn Write) -> Result<()> {
  require(state, &Route::Dashboard)?;
  match state.session().profile() {
    ProfileState::Present(user) => {
      writeln!(out, "Name:  {}", user.display_name())?;
      writeln!(out, "Email: {}", user.email)?;
      let role = user.role.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string());
      writeln!(out, "Role:  {}", role)?;
    }
    ProfileState::Missing => writeln!(out, "Signed in, but no profile is stored.")?,
    ProfileState::Malformed(reason) => writeln!(out, "Stored profile is unreadable: {}", reason)?,
  }
  Ok(())
}

pub async fn verify(state: &AppState, out: &mut dyn Write) -> Result<()> {
  if auth_service::verify(&state.client).await? {
    writeln!(out, "Token is valid.")?;
  } else {
    writeln!(out, "No valid session.")?;
    navigate(out, &Route::Login)?;
  }
  Ok(())
}
