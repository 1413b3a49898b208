// pos_admin/src/models/product.rs

use crate::wire::coerce;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_active() -> bool {
  true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  #[serde(with = "coerce::id")]
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(with = "coerce::decimal")]
  pub price: Decimal,
  #[serde(default, with = "coerce::integer")]
  pub stock: i64,
  #[serde(default)]
  pub sku: Option<String>,
  #[serde(default = "default_active")]
  pub is_active: bool,
  #[serde(default)]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
  pub fn is_out_of_stock(&self) -> bool {
    self.stock <= 0
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
  pub name: String,
  pub description: Option<String>,
  #[serde(with = "coerce::decimal")]
  pub price: Decimal,
  pub stock: i64,
  pub sku: Option<String>,
  pub is_active: bool,
}

/// Partial update; `None` fields are left out of the body. `description`
/// and `sku` use `Some(None)` to send an explicit `null`, clearing the value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<Option<String>>,
  #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_opt_amount")]
  pub price: Option<Decimal>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub stock: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sku: Option<Option<String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_active: Option<bool>,
}

impl UpdateProductRequest {
  pub fn is_empty(&self) -> bool {
    *self == Self::default()
  }
}

fn serialize_opt_amount<S: serde::Serializer>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error> {
  match value {
    Some(amount) => coerce::decimal::serialize(amount, serializer),
    None => serializer.serialize_none(),
  }
}
