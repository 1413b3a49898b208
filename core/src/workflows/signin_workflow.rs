// pos_admin/src/workflows/signin_workflow.rs

use crate::error::{PosError, PosResult};
use crate::flow::{ContextData, Flow, FlowControl, FlowOutcome};
use crate::forms;
use crate::http::ApiClient;
use crate::models::SessionUser;
use crate::services::auth_service;
use crate::workflows::contexts::SigninCtxData;
use tracing::{event, info, instrument, Level};

pub const VALIDATE_CREDENTIALS: &str = "validate_credentials";
pub const AUTHENTICATE: &str = "authenticate";
pub const ESTABLISH_SESSION: &str = "establish_session";

/// validate_credentials → authenticate → establish_session
pub fn signin_flow() -> Flow<SigninCtxData> {
  let mut flow = Flow::new(
    "sign_in",
    &[
      (VALIDATE_CREDENTIALS, false),
      (AUTHENTICATE, false),
      (ESTABLISH_SESSION, false),
    ],
  );

  flow.on_step(VALIDATE_CREDENTIALS, |ctx: ContextData<SigninCtxData>| async move {
    let (email, password) = ctx.with(|d| (d.email.clone(), d.password.clone()));
    event!(Level::DEBUG, email = %email, "Validating sign-in input.");
    let credentials = forms::validate_login(&email, &password)?;
    ctx.write().credentials = Some(credentials);
    Ok::<_, PosError>(FlowControl::Continue)
  });

  flow.on_step(AUTHENTICATE, |ctx: ContextData<SigninCtxData>| async move {
    let (client, login_path, credentials) = {
      let guard = ctx.read();
      (guard.client.clone(), guard.login_path.clone(), guard.credentials.clone())
    };
    let credentials = credentials.ok_or_else(|| PosError::Flow {
      step: AUTHENTICATE.to_string(),
      message: "credentials were not validated".to_string(),
    })?;

    let response = auth_service::login(&client, &login_path, &credentials).await?;
    ctx.write().response = Some(response);
    Ok::<_, PosError>(FlowControl::Continue)
  });

  flow.on_step(ESTABLISH_SESSION, |ctx: ContextData<SigninCtxData>| async move {
    let (client, response) = {
      let guard = ctx.read();
      (guard.client.clone(), guard.response.clone())
    };
    let response = response.ok_or_else(|| PosError::Flow {
      step: ESTABLISH_SESSION.to_string(),
      message: "no login response to store".to_string(),
    })?;

    client.session().establish(&response.token, &response.user)?;
    info!(user_id = %response.user.id, admin = response.user.is_admin(), "User signed in.");
    ctx.write().user = Some(response.user);
    Ok::<_, PosError>(FlowControl::Continue)
  });

  flow
}

/// Logs in and stores the session. Returns the signed-in profile.
#[instrument(name = "workflows::sign_in", skip(client, password), err(Display))]
pub async fn sign_in(client: &ApiClient, login_path: &str, email: &str, password: &str) -> PosResult<SessionUser> {
  let ctx = ContextData::new(SigninCtxData::new(client.clone(), login_path, email, password));
  match signin_flow().run(ctx.clone()).await? {
    FlowOutcome::Completed => {}
    FlowOutcome::Stopped => return Err(PosError::Internal("sign-in flow stopped early".to_string())),
  }
  let user = ctx.write().user.take();
  user.ok_or_else(|| PosError::Internal("sign-in completed without a user".to_string()))
}
