// pos_admin_console/src/screens/users.rs

use super::{activity_flag, confirm, require};
use crate::cli::{UserFieldArgs, UsersAction};
use crate::errors::{ConsoleError, Result};
use crate::render::{active_label, navigate, Table};
use crate::state::AppState;
use pos_admin::filters::filter_users;
use pos_admin::models::{Role, User};
use pos_admin::services::users_service;
use pos_admin::{Route, UserForm};
use std::io::Write;

pub async fn run(state: &AppState, action: UsersAction, out: &mut dyn Write) -> Result<()> {
  match action {
    UsersAction::List { search } => {
      require(state, &Route::Users)?;
      let users = users_service::get_all(&state.client).await?;
      let shown = filter_users(&users, search.as_deref().unwrap_or_default());
      write_table(out, &shown)?;
      writeln!(out, "{} of {} users", shown.len(), users.len())?;
    }
    UsersAction::Add { fields, inactive } => {
      require(state, &Route::UserAdd)?;
      let mut form = UserForm::default();
      apply_fields(&mut form, fields)?;
      form.is_active = !inactive;
      let request = form.to_create_request()?;
      let user = users_service::create(&state.client, &request).await?;
      writeln!(out, "User created: {} <{}>", user.name, user.email)?;
      navigate(out, &Route::Users)?;
    }
    UsersAction::Edit {
      id,
      fields,
      active,
      inactive,
    } => {
      require(state, &Route::UserEdit(id.clone()))?;
      let current = users_service::get_by_id(&state.client, &id).await?;
      let mut form = UserForm::from_user(&current);
      apply_fields(&mut form, fields)?;
      if let Some(flag) = activity_flag(active, inactive) {
        form.is_active = flag;
      }
      let request = form.to_update_request()?;
      let user = users_service::update(&state.client, &id, &request).await?;
      writeln!(out, "User updated: {} <{}>", user.name, user.email)?;
      navigate(out, &Route::Users)?;
    }
    UsersAction::Delete { id, yes } => {
      require(state, &Route::Users)?;
      confirm(yes, &format!("user {}", id))?;
      let ack = users_service::delete(&state.client, &id).await?;
      let message = ack.message.unwrap_or_else(|| format!("User {} deleted.", id));
      writeln!(out, "{}", message)?;
      navigate(out, &Route::Users)?;
    }
    UsersAction::Toggle { id } => {
      require(state, &Route::Users)?;
      let user = users_service::toggle_active(&state.client, &id).await?;
      writeln!(out, "{} is now {}.", user.email, active_label(user.is_active).to_lowercase())?;
    }
  }
  Ok(())
}

/// Copies the given flags onto the form. A password without confirmation
/// is confirmed with itself.
fn apply_fields(form: &mut UserForm, fields: UserFieldArgs) -> Result<()> {
  if let Some(name) = fields.name {
    form.name = name;
  }
  if let Some(email) = fields.email {
    form.email = email;
  }
  if let Some(password) = fields.password {
    form.confirm_password = fields.confirm_password.unwrap_or_else(|| password.clone());
    form.password = password;
  }
  if let Some(role) = fields.role {
    form.role = role.parse::<Role>().map_err(ConsoleError::Input)?;
  }
  Ok(())
}

fn write_table(out: &mut dyn Write, users: &[&User]) -> std::io::Result<()> {
  if users.is_empty() {
    return writeln!(out, "No users found.");
  }
  let mut table = Table::new(&["ID", "Name", "Email", "Role", "Status"]);
  for u in users {
    table.row(vec![
      u.id.clone(),
      u.name.clone(),
      u.email.clone(),
      u.role.to_string(),
      active_label(u.is_active).to_string(),
    ]);
  }
  table.write_to(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::screens::test_support::{output, state};
  use pos_admin::http::HttpMethod;
  use pos_admin::PosError;
  use serde_json::json;

  fn user(id: &str, email: &str, role: &str) -> serde_json::Value {
    json!({ "id": id, "email": email, "name": "Ana", "role": role, "isActive": true })
  }

  #[tokio::test]
  async fn non_admin_is_redirected_to_dashboard() {
    let (mock, app) = state(Some(Role::User));
    let mut buf = Vec::new();
    let err = run(&app, UsersAction::List { search: None }, &mut buf).await.unwrap_err();
    assert!(matches!(err, ConsoleError::Redirected { to: Route::Dashboard }));
    assert_eq!(mock.request_count(), 0);
  }

  #[tokio::test]
  async fn admin_lists_users() {
    let (mock, app) = state(Some(Role::Admin));
    mock.on(
      HttpMethod::Get,
      "/users",
      200,
      json!({ "users": [user("u-1", "ana@tienda.co", "admin"), user("u-2", "luis@tienda.co", "user")] }),
    );
    let mut buf = Vec::new();
    run(&app, UsersAction::List { search: Some("luis".into()) }, &mut buf)
      .await
      .unwrap();
    let text = output(buf);
    assert!(text.contains("luis@tienda.co"));
    assert!(text.contains("1 of 2 users"));
  }

  #[tokio::test]
  async fn add_rejects_short_password() {
    let (mock, app) = state(Some(Role::Admin));
    let fields = UserFieldArgs {
      name: Some("Luis".into()),
      email: Some("luis@tienda.co".into()),
      password: Some("123".into()),
      ..UserFieldArgs::default()
    };
    let mut buf = Vec::new();
    let err = run(&app, UsersAction::Add { fields, inactive: false }, &mut buf)
      .await
      .unwrap_err();
    match err {
      ConsoleError::Core(PosError::InvalidForm(errors)) => assert!(errors.get("password").is_some()),
      other => panic!("unexpected {:?}", other),
    }
    assert_eq!(mock.request_count(), 0);
  }

  #[tokio::test]
  async fn edit_without_password_omits_it() {
    let (mock, app) = state(Some(Role::Admin));
    mock.on(HttpMethod::Get, "/users/u-2", 200, user("u-2", "luis@tienda.co", "user"));
    mock.on(HttpMethod::Put, "/users/u-2", 200, user("u-2", "luis@tienda.co", "admin"));

    let fields = UserFieldArgs {
      role: Some("admin".into()),
      ..UserFieldArgs::default()
    };
    let mut buf = Vec::new();
    run(
      &app,
      UsersAction::Edit {
        id: "u-2".into(),
        fields,
        active: false,
        inactive: false,
      },
      &mut buf,
    )
    .await
    .unwrap();

    let body = mock.last_request().unwrap().body.unwrap();
    assert_eq!(body["role"], json!("admin"));
    assert!(body.get("password").is_none());
  }

  #[test]
  fn unknown_role_is_input_error() {
    let mut form = UserForm::default();
    let fields = UserFieldArgs {
      role: Some("owner".into()),
      ..UserFieldArgs::default()
    };
    assert!(matches!(apply_fields(&mut form, fields), Err(ConsoleError::Input(_))));
  }
}
