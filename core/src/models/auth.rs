// pos_admin/src/models/auth.rs

use crate::models::user::Role;
use crate::wire::coerce;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
  pub email: String,
  pub password: String,
}

impl fmt::Debug for LoginCredentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LoginCredentials")
      .field("email", &self.email)
      .field("password", &"[REDACTED]")
      .finish()
  }
}

/// The profile stored next to the token after login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
  #[serde(with = "coerce::id")]
  pub id: String,
  pub email: String,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub role: Option<Role>,
}

impl SessionUser {
  pub fn is_admin(&self) -> bool {
    self.role == Some(Role::Admin)
  }

  pub fn display_name(&self) -> &str {
    self.name.as_deref().filter(|n| !n.trim().is_empty()).unwrap_or(&self.email)
  }
}

#[derive(Clone, Deserialize)]
pub struct LoginResponse {
  pub token: String,
  pub user: SessionUser,
}

impl fmt::Debug for LoginResponse {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LoginResponse")
      .field("token", &"[REDACTED]")
      .field("user", &self.user)
      .finish()
  }
}
