// pos_admin/src/guard.rs

//! Screen routes and the session guard in front of them.
//!
//! The guard only reads the session. It never calls the API.

use crate::models::Role;
use crate::session::{ProfileState, SessionContext};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
  Login,
  Dashboard,
  Products,
  ProductAdd,
  ProductEdit(String),
  ProductView(String),
  Sales,
  SaleNew,
  SaleView(String),
  Users,
  UserAdd,
  UserEdit(String),
}

impl Route {
  /// Maps a path to its route. `/` and unknown paths land on the login
  /// screen.
  pub fn resolve(path: &str) -> Route {
    let segments: Vec<&str> = path
      .split('?')
      .next()
      .unwrap_or_default()
      .split('/')
      .filter(|s| !s.is_empty())
      .collect();

    match segments.as_slice() {
      ["login"] => Route::Login,
      ["dashboard"] => Route::Dashboard,
      ["products"] => Route::Products,
      ["products", "add"] => Route::ProductAdd,
      ["products", "edit", id] => Route::ProductEdit((*id).to_string()),
      ["products", "view", id] => Route::ProductView((*id).to_string()),
      ["sales"] => Route::Sales,
      ["sales", "new"] => Route::SaleNew,
      ["sales", "view", id] => Route::SaleView((*id).to_string()),
      ["users"] => Route::Users,
      ["users", "add"] => Route::UserAdd,
      ["users", "edit", id] => Route::UserEdit((*id).to_string()),
      _ => Route::Login,
    }
  }

  pub fn path(&self) -> String {
    match self {
      Route::Login => "/login".to_string(),
      Route::Dashboard => "/dashboard".to_string(),
      Route::Products => "/products".to_string(),
      Route::ProductAdd => "/products/add".to_string(),
      Route::ProductEdit(id) => format!("/products/edit/{}", id),
      Route::ProductView(id) => format!("/products/view/{}", id),
      Route::Sales => "/sales".to_string(),
      Route::SaleNew => "/sales/new".to_string(),
      Route::SaleView(id) => format!("/sales/view/{}", id),
      Route::Users => "/users".to_string(),
      Route::UserAdd => "/users/add".to_string(),
      Route::UserEdit(id) => format!("/users/edit/{}", id),
    }
  }

  pub fn requires_auth(&self) -> bool {
    !matches!(self, Route::Login)
  }

  pub fn required_role(&self) -> Option<Role> {
    match self {
      Route::Users | Route::UserAdd | Route::UserEdit(_) => Some(Role::Admin),
      _ => None,
    }
  }
}

impl fmt::Display for Route {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.path())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
  Allow,
  Redirect(Route),
}

pub fn check_access(session: &SessionContext, route: &Route) -> AccessDecision {
  if !route.requires_auth() {
    return AccessDecision::Allow;
  }
  if !session.is_authenticated() {
    debug!(route = %route, "No stored token; redirecting to login.");
    return AccessDecision::Redirect(Route::Login);
  }

  let required = match route.required_role() {
    Some(role) => role,
    None => return AccessDecision::Allow,
  };

  match session.profile() {
    ProfileState::Present(user) if user.role.as_ref() == Some(&required) => AccessDecision::Allow,
    ProfileState::Present(user) => {
      debug!(route = %route, user_id = %user.id, "Role not sufficient; redirecting to dashboard.");
      AccessDecision::Redirect(Route::Dashboard)
    }
    ProfileState::Missing | ProfileState::Malformed(_) => {
      debug!(route = %route, "Stored profile unusable; redirecting to login.");
      AccessDecision::Redirect(Route::Login)
    }
  }
}
