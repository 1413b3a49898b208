// pos_admin_console/src/main.rs

mod cli;
mod config;
mod errors;
mod render;
mod screens;
mod state;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::errors::ConsoleError;
use crate::state::AppState;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbosity: u8, json: bool) {
  let default_level = match verbosity {
    0 => "warn",
    1 => "info",
    _ => "debug",
  };
  // RUST_LOG wins over -v.
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE)
    .with_writer(io::stderr);
  if json {
    builder.json().init();
  } else {
    builder.init();
  }
}

#[tokio::main]
async fn main() -> ExitCode {
  let cli = Cli::parse();

  let mut app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      eprintln!("error: {}", e);
      return e.into();
    }
  };
  if let Some(url) = cli.api_url.clone() {
    app_config.api_base_url = url.trim_end_matches('/').to_string();
  }
  if let Some(path) = cli.session_file.clone() {
    app_config.session_file = path;
  }

  init_tracing(cli.verbose, app_config.log_json);
  tracing::info!(api = %app_config.api_base_url, "Starting pos-admin console.");

  let app_state = match AppState::from_config(app_config) {
    Ok(state) => state,
    Err(e) => {
      tracing::error!(error = %e, "Failed to initialize console state.");
      eprintln!("error: {}", e);
      return e.into();
    }
  };

  let stdout = io::stdout();
  let mut out = stdout.lock();
  match screens::dispatch(&app_state, cli.command, &mut out).await {
    Ok(()) => {
      let _ = out.flush();
      ExitCode::SUCCESS
    }
    Err(e) => {
      let _ = out.flush();
      report(&e);
      e.into()
    }
  }
}

fn report(err: &ConsoleError) {
  tracing::error!(error = %err, exit_code = err.exit_code(), "Command failed.");
  eprintln!("error: {}", err);
  if let Some(route) = err.next_route() {
    eprintln!("→ {}", route);
  }
}
