// pos_admin/src/models/sale.rs

use crate::wire::coerce;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sale lifecycle status. Unknown strings are kept so they can still be shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SaleStatus {
  Pending,
  Completed,
  Cancelled,
  Other(String),
}

impl SaleStatus {
  pub fn as_str(&self) -> &str {
    match self {
      SaleStatus::Pending => "pending",
      SaleStatus::Completed => "completed",
      SaleStatus::Cancelled => "cancelled",
      SaleStatus::Other(raw) => raw.as_str(),
    }
  }

  /// Human label used by the console listings.
  pub fn label(&self) -> &str {
    match self {
      SaleStatus::Pending => "Pendiente",
      SaleStatus::Completed => "Completada",
      SaleStatus::Cancelled => "Cancelada",
      SaleStatus::Other(raw) => raw.as_str(),
    }
  }
}

impl From<String> for SaleStatus {
  fn from(raw: String) -> Self {
    match raw.to_lowercase().as_str() {
      "pending" => SaleStatus::Pending,
      "completed" => SaleStatus::Completed,
      "cancelled" => SaleStatus::Cancelled,
      _ => SaleStatus::Other(raw),
    }
  }
}

impl From<SaleStatus> for String {
  fn from(status: SaleStatus) -> Self {
    status.as_str().to_string()
  }
}

impl std::str::FromStr for SaleStatus {
  type Err = std::convert::Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(SaleStatus::from(s.to_string()))
  }
}

impl fmt::Display for SaleStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
  #[serde(with = "coerce::id")]
  pub id: String,
  #[serde(default)]
  pub sale_number: String,
  #[serde(default, with = "coerce::opt_id")]
  pub user_id: Option<String>,
  #[serde(with = "coerce::decimal")]
  pub total: Decimal,
  pub status: SaleStatus,
  /// As sent by the server: a bare date or a full timestamp.
  #[serde(default)]
  pub sale_date: String,
  #[serde(default)]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub updated_at: Option<DateTime<Utc>>,
}

impl Sale {
  /// The date portion of `sale_date` (`YYYY-MM-DD`).
  pub fn sale_day(&self) -> &str {
    self.sale_date.get(..10).unwrap_or(&self.sale_date)
  }

  pub fn counts_as_revenue(&self) -> bool {
    self.status != SaleStatus::Cancelled
  }
}

/// How the customer paid. The serialized names are the API's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
  #[default]
  #[serde(rename = "Efectivo")]
  Cash,
  #[serde(rename = "Tarjeta")]
  Card,
  #[serde(rename = "Transferencia")]
  Transfer,
  #[serde(rename = "Mixto")]
  Mixed,
}

impl PaymentMethod {
  pub const ALL: [PaymentMethod; 4] = [
    PaymentMethod::Cash,
    PaymentMethod::Card,
    PaymentMethod::Transfer,
    PaymentMethod::Mixed,
  ];

  pub fn wire_name(&self) -> &'static str {
    match self {
      PaymentMethod::Cash => "Efectivo",
      PaymentMethod::Card => "Tarjeta",
      PaymentMethod::Transfer => "Transferencia",
      PaymentMethod::Mixed => "Mixto",
    }
  }
}

impl std::str::FromStr for PaymentMethod {
  type Err = String;

  /// Accepts the wire name or the English keyword, case-insensitively.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim().to_lowercase();
    PaymentMethod::ALL
      .into_iter()
      .find(|m| {
        let english = format!("{:?}", m).to_lowercase();
        m.wire_name().to_lowercase() == wanted || english == wanted
      })
      .ok_or_else(|| format!("unknown payment method '{}'", s))
  }
}

impl fmt::Display for PaymentMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.wire_name())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItemRequest {
  pub product_id: String,
  pub quantity: u32,
  #[serde(with = "coerce::decimal")]
  pub unit_price: Decimal,
  #[serde(with = "coerce::decimal")]
  pub subtotal: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleRequest {
  pub client_name: String,
  pub sale_date: NaiveDate,
  pub payment_method: PaymentMethod,
  pub items: Vec<SaleItemRequest>,
  #[serde(with = "coerce::decimal")]
  pub subtotal: Decimal,
  #[serde(with = "coerce::decimal")]
  pub discount: Decimal,
  #[serde(with = "coerce::decimal")]
  pub total: Decimal,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub observations: Option<String>,
}

/// Partial sale update sent with PUT.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSaleRequest {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status: Option<SaleStatus>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sale_date: Option<String>,
}
