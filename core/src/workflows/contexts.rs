// pos_admin/src/workflows/contexts.rs

//! Context data carried through each workflow. Handlers receive these
//! wrapped in `ContextData`.

use crate::http::ApiClient;
use crate::models::{CreateSaleRequest, LoginCredentials, LoginResponse, Sale, SessionUser};
use crate::sale::SaleComposer;

#[derive(Clone)]
pub struct SigninCtxData {
  pub client: ApiClient,
  pub login_path: String,
  pub email: String,
  pub password: String,
  pub credentials: Option<LoginCredentials>,
  pub response: Option<LoginResponse>,
  pub user: Option<SessionUser>,
}

impl SigninCtxData {
  pub fn new(client: ApiClient, login_path: &str, email: &str, password: &str) -> Self {
    Self {
      client,
      login_path: login_path.to_string(),
      email: email.to_string(),
      password: password.to_string(),
      credentials: None,
      response: None,
      user: None,
    }
  }
}

#[derive(Clone)]
pub struct SaleSubmissionCtxData {
  pub client: ApiClient,
  pub draft: SaleComposer,
  pub request: Option<CreateSaleRequest>,
  pub created: Option<Sale>,
  pub draft_cleared: bool,
}

impl SaleSubmissionCtxData {
  pub fn new(client: ApiClient, draft: SaleComposer) -> Self {
    Self {
      client,
      draft,
      request: None,
      created: None,
      draft_cleared: false,
    }
  }
}
