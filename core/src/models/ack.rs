// pos_admin/src/models/ack.rs

use serde::{Deserialize, Serialize};

fn default_success() -> bool {
  true
}

/// Answer of a delete endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
  #[serde(default = "default_success")]
  pub success: bool,
  #[serde(default)]
  pub message: Option<String>,
}

impl Default for DeleteAck {
  fn default() -> Self {
    Self {
      success: true,
      message: None,
    }
  }
}
