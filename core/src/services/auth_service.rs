// pos_admin/src/services/auth_service.rs

use crate::error::{PosError, PosResult};
use crate::http::ApiClient;
use crate::models::{LoginCredentials, LoginResponse};
use crate::wire::decode_one;
use tracing::{info, instrument, warn};

pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";
/// Login route used by earlier API versions.
pub const LEGACY_LOGIN_PATH: &str = "/users/login";

/// Exchanges credentials for a token and profile. Does not touch the
/// session; the sign-in workflow stores the result.
#[instrument(name = "auth_service::login", skip(client, credentials), fields(email = %credentials.email), err(Display))]
pub async fn login(client: &ApiClient, login_path: &str, credentials: &LoginCredentials) -> PosResult<LoginResponse> {
  let payload = client.post_public(login_path, credentials).await?;
  let response: LoginResponse = decode_one(payload, "auth")?;
  if response.token.trim().is_empty() {
    return Err(PosError::Decode("login response carried an empty token".to_string()));
  }
  info!(user_id = %response.user.id, "Credentials accepted.");
  Ok(response)
}

/// Asks the API whether the stored token is still valid.
#[instrument(name = "auth_service::verify", skip(client), err(Display))]
pub async fn verify(client: &ApiClient) -> PosResult<bool> {
  if !client.session().is_authenticated() {
    return Ok(false);
  }
  match client.get("/auth/verify").await {
    Ok(_) => Ok(true),
    Err(PosError::Unauthorized) => Ok(false),
    Err(PosError::Api { status, message }) => {
      warn!(status, %message, "Token verification rejected.");
      Ok(false)
    }
    Err(e) => Err(e),
  }
}

#[instrument(name = "auth_service::logout", skip(client), err(Display))]
pub fn logout(client: &ApiClient) -> PosResult<()> {
  client.session().clear()
}
