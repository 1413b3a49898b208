// pos_admin_console/src/screens/mod.rs

//! One module per console screen. Every command passes the session guard
//! for its route before any request is made.

pub mod auth;
pub mod dashboard;
pub mod products;
pub mod sales;
pub mod users;

use crate::cli::Command;
use crate::errors::{ConsoleError, Result};
use crate::state::AppState;
use pos_admin::{check_access, AccessDecision, Route};
use std::io::Write;
use tracing::{debug, warn};

pub async fn dispatch(state: &AppState, command: Command, out: &mut dyn Write) -> Result<()> {
  match command {
    Command::Login { email, password } => auth::login(state, &email, &password, out).await,
    Command::Logout => auth::logout(state, out),
    Command::Whoami => auth::whoami(state, out),
    Command::Verify => auth::verify(state, out).await,
    Command::Dashboard => dashboard::show(state, out).await,
    Command::Products(args) => products::run(state, args.action, out).await,
    Command::Sales(args) => sales::run(state, args.action, out).await,
    Command::Users(args) => users::run(state, args.action, out).await,
  }
}

/// Session guard for `route`.
pub fn require(state: &AppState, route: &Route) -> Result<()> {
  match check_access(state.session(), route) {
    AccessDecision::Allow => {
      debug!(route = %route, "Access granted.");
      Ok(())
    }
    AccessDecision::Redirect(to) => {
      warn!(route = %route, redirect = %to, "Access denied by session guard.");
      Err(ConsoleError::Redirected { to })
    }
  }
}

pub(crate) fn confirm(yes: bool, what: &str) -> Result<()> {
  if yes {
    Ok(())
  } else {
    Err(ConsoleError::Input(format!("refusing to delete {} without --yes", what)))
  }
}

/// Resolves `--active` / `--inactive` into an optional flag.
pub(crate) fn activity_flag(active: bool, inactive: bool) -> Option<bool> {
  match (active, inactive) {
    (true, _) => Some(true),
    (_, true) => Some(false),
    _ => None,
  }
}
