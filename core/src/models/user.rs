// pos_admin/src/models/user.rs

use crate::wire::coerce;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Admin,
  /// Any role other than `admin` is treated as a regular user.
  #[default]
  #[serde(other)]
  User,
}

impl Role {
  pub fn as_str(&self) -> &'static str {
    match self {
      Role::Admin => "admin",
      Role::User => "user",
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for Role {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "admin" => Ok(Role::Admin),
      "user" => Ok(Role::User),
      other => Err(format!("unknown role '{}'", other)),
    }
  }
}

fn default_active() -> bool {
  true
}

/// A user account as returned by the API. Passwords never appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  #[serde(with = "coerce::id")]
  pub id: String,
  pub email: String,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub role: Role,
  #[serde(default = "default_active")]
  pub is_active: bool,
  #[serde(default)]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
  pub email: String,
  pub password: String,
  pub name: String,
  pub role: Role,
  pub is_active: bool,
}

/// Partial user update. `password` is only sent when it is being changed.
#[derive(Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub password: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub role: Option<Role>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_active: Option<bool>,
}

// Requests carry passwords; keep them out of logs.
impl fmt::Debug for CreateUserRequest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CreateUserRequest")
      .field("email", &self.email)
      .field("password", &"[REDACTED]")
      .field("name", &self.name)
      .field("role", &self.role)
      .field("is_active", &self.is_active)
      .finish()
  }
}

impl fmt::Debug for UpdateUserRequest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("UpdateUserRequest")
      .field("email", &self.email)
      .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
      .field("name", &self.name)
      .field("role", &self.role)
      .field("is_active", &self.is_active)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn password_field_in_response_is_ignored() {
    let user: User = serde_json::from_value(json!({
      "id": "u-1",
      "email": "ana@tienda.co",
      "password": "$2b$10$hash",
      "name": "Ana",
      "role": "admin",
      "isActive": true
    }))
    .unwrap();
    assert_eq!(user.role, Role::Admin);
    let back = serde_json::to_value(&user).unwrap();
    assert!(back.get("password").is_none());
  }

  #[test]
  fn unknown_role_decodes_as_user() {
    let role: Role = serde_json::from_value(json!("cashier")).unwrap();
    assert_eq!(role, Role::User);
  }

  #[test]
  fn update_without_password_omits_it() {
    let update = UpdateUserRequest {
      name: Some("Ana María".to_string()),
      ..Default::default()
    };
    assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "name": "Ana María" }));
    assert!(format!("{:?}", UpdateUserRequest {
      password: Some("secret1".to_string()),
      ..Default::default()
    })
    .contains("[REDACTED]"));
  }
}
