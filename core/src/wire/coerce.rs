// pos_admin/src/wire/coerce.rs

//! Serde adapters for fields the API sends inconsistently, e.g. prices as
//! `10000`, `10000.5` or `"10000.50"`. Use with `#[serde(with = "...")]`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{de, ser, Deserialize, Deserializer, Serializer};
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
  Number(serde_json::Number),
  Text(String),
}

/// Parses a decimal from plain (`"12.50"`) or scientific (`"1.25e1"`) notation.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }
  Decimal::from_str(trimmed)
    .or_else(|_| Decimal::from_scientific(trimmed))
    .ok()
}

/// Money amounts: decoded from numbers or numeric strings, encoded as JSON
/// numbers (integers when there is no fractional part).
pub mod decimal {
  use super::*;

  pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    let normalized = value.normalize();
    if normalized.fract().is_zero() {
      if let Some(whole) = normalized.to_i64() {
        return serializer.serialize_i64(whole);
      }
    }
    match normalized.to_f64() {
      Some(float) => serializer.serialize_f64(float),
      None => Err(ser::Error::custom(format!("amount {} is not representable as a number", value))),
    }
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    let raw = match NumberOrText::deserialize(deserializer)? {
      NumberOrText::Number(n) => n.to_string(),
      NumberOrText::Text(s) => s,
    };
    parse_decimal(&raw).ok_or_else(|| de::Error::custom(format!("invalid amount '{}'", raw)))
  }
}

/// Whole numbers (stock, quantities) sent as `3`, `3.0` or `"3"`.
pub mod integer {
  use super::*;

  pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(*value)
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let raw = match NumberOrText::deserialize(deserializer)? {
      NumberOrText::Number(n) => {
        if let Some(whole) = n.as_i64() {
          return Ok(whole);
        }
        n.to_string()
      }
      NumberOrText::Text(s) => s,
    };
    parse_decimal(&raw)
      .filter(|d| d.fract().is_zero())
      .and_then(|d| d.to_i64())
      .ok_or_else(|| de::Error::custom(format!("invalid whole number '{}'", raw)))
  }
}

/// Identifiers: UUID strings from some deployments, integers from others.
pub mod id {
  use super::*;

  pub fn serialize<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value)
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match NumberOrText::deserialize(deserializer)? {
      NumberOrText::Number(n) => n.to_string(),
      NumberOrText::Text(s) => s,
    })
  }
}

/// Optional identifiers (`null`, absent, number or string).
pub mod opt_id {
  use super::*;

  pub fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
      Some(id) => serializer.serialize_str(id),
      None => serializer.serialize_none(),
    }
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<NumberOrText>::deserialize(deserializer)?.map(|raw| match raw {
      NumberOrText::Number(n) => n.to_string(),
      NumberOrText::Text(s) => s,
    }))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;
  use serde::{Deserialize, Serialize};

  #[derive(Debug, Serialize, Deserialize)]
  struct Priced {
    #[serde(with = "decimal")]
    price: Decimal,
    #[serde(with = "integer")]
    stock: i64,
    #[serde(with = "id")]
    id: String,
  }

  #[test]
  fn decodes_numbers_and_numeric_strings() {
    let a: Priced = serde_json::from_str(r#"{"price": 10000, "stock": 4, "id": 7}"#).unwrap();
    let b: Priced = serde_json::from_str(r#"{"price": "10000.00", "stock": "4", "id": "7"}"#).unwrap();
    assert_eq!(a.price, dec!(10000));
    assert_eq!(b.price, dec!(10000));
    assert_eq!(a.stock, b.stock);
    assert_eq!(a.id, "7");
    assert_eq!(b.id, "7");
  }

  #[test]
  fn rejects_garbage_amounts() {
    let err = serde_json::from_str::<Priced>(r#"{"price": "abc", "stock": 1, "id": "x"}"#).unwrap_err();
    assert!(err.to_string().contains("invalid amount"));
    let err = serde_json::from_str::<Priced>(r#"{"price": 1, "stock": "1.5", "id": "x"}"#).unwrap_err();
    assert!(err.to_string().contains("invalid whole number"));
  }

  #[test]
  fn encodes_whole_amounts_as_integers() {
    let p = Priced {
      price: dec!(2500.00),
      stock: 3,
      id: "p-1".to_string(),
    };
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["price"], serde_json::json!(2500));

    let p = Priced {
      price: dec!(19.5),
      stock: 3,
      id: "p-1".to_string(),
    };
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["price"], serde_json::json!(19.5));
  }

  #[test]
  fn parse_decimal_handles_scientific_and_blank() {
    assert_eq!(parse_decimal("1.25e1"), Some(dec!(12.5)));
    assert_eq!(parse_decimal("  42 "), Some(dec!(42)));
    assert_eq!(parse_decimal(""), None);
  }
}
