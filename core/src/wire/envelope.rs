// pos_admin/src/wire/envelope.rs

//! Unwraps the response envelopes the API uses inconsistently.
//!
//! List endpoints answer with a bare array, `{ "data": [...] }`,
//! `{ "data": { "<resource>": [...] } }` or `{ "<resource>": [...] }`.
//! Single-entity endpoints answer with the object itself, a one-element
//! array, `{ "data": {...} }` or `{ "<singular>": {...} }`.

use crate::error::{PosError, PosResult};
use crate::models::DeleteAck;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Extracts the list carried by `payload`. Unrecognized shapes yield an
/// empty list.
pub fn list_payload(payload: Value, resource_key: &str) -> Vec<Value> {
  match payload {
    Value::Array(items) => items,
    Value::Object(mut map) => {
      if let Some(data) = map.remove("data") {
        match data {
          Value::Array(items) => return items,
          Value::Object(mut inner) => {
            if let Some(Value::Array(items)) = inner.remove(resource_key) {
              return items;
            }
          }
          _ => {}
        }
      }
      if let Some(Value::Array(items)) = map.remove(resource_key) {
        return items;
      }
      warn!(resource = resource_key, "List response has no recognizable envelope; treating as empty.");
      Vec::new()
    }
    Value::Null => Vec::new(),
    other => {
      warn!(resource = resource_key, kind = %value_kind(&other), "List response is not a collection; treating as empty.");
      Vec::new()
    }
  }
}

/// Extracts the single entity carried by `payload`.
pub fn single_payload(payload: Value, singular_key: &str) -> PosResult<Value> {
  match payload {
    Value::Array(items) => items
      .into_iter()
      .next()
      .ok_or_else(|| PosError::NotFound(format!("empty {} response", singular_key))),
    Value::Object(mut map) => {
      if matches!(map.get("data"), Some(Value::Object(_))) {
        if let Some(data) = map.remove("data") {
          return Ok(data);
        }
      }
      if matches!(map.get(singular_key), Some(Value::Object(_))) {
        if let Some(entity) = map.remove(singular_key) {
          return Ok(entity);
        }
      }
      Ok(Value::Object(map))
    }
    Value::Null => Err(PosError::NotFound(format!("empty {} response", singular_key))),
    other => Err(PosError::Decode(format!(
      "expected a {} object, got {}",
      singular_key,
      value_kind(&other)
    ))),
  }
}

/// Decodes every record of a list response. Records that do not decode are
/// logged and skipped so the rest of the list still renders.
pub fn decode_list<T: DeserializeOwned>(payload: Value, resource_key: &str) -> PosResult<Vec<T>> {
  let items: Vec<T> = list_payload(payload, resource_key)
    .into_iter()
    .enumerate()
    .filter_map(|(idx, item)| match serde_json::from_value(item) {
      Ok(decoded) => Some(decoded),
      Err(e) => {
        warn!(resource = resource_key, index = idx, error = %e, "Skipping undecodable list record.");
        None
      }
    })
    .collect();
  Ok(items)
}

pub fn decode_one<T: DeserializeOwned>(payload: Value, singular_key: &str) -> PosResult<T> {
  let entity = single_payload(payload, singular_key)?;
  serde_json::from_value(entity).map_err(|e| PosError::Decode(format!("{}: {}", singular_key, e)))
}

/// Delete endpoints answer with `{ message, success }`, a bare message or
/// nothing at all.
pub fn decode_ack(payload: Value) -> PosResult<DeleteAck> {
  match payload {
    Value::Null => Ok(DeleteAck::default()),
    Value::String(message) => Ok(DeleteAck {
      success: true,
      message: Some(message),
    }),
    Value::Object(_) => Ok(serde_json::from_value(payload)?),
    other => Err(PosError::Decode(format!(
      "unexpected delete acknowledgement: {}",
      value_kind(&other)
    ))),
  }
}

fn value_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn every_list_shape_yields_the_same_items() {
    let items = json!([{ "id": 1 }, { "id": 2 }]);
    let shapes = vec![
      items.clone(),
      json!({ "data": items.clone() }),
      json!({ "products": items.clone(), "total": 2 }),
      json!({ "data": { "products": items.clone() } }),
    ];
    for shape in shapes {
      let list = list_payload(shape, "products");
      assert_eq!(list.len(), 2);
      assert_eq!(list[1]["id"], json!(2));
    }
  }

  #[test]
  fn unknown_list_shapes_are_empty() {
    assert!(list_payload(json!({ "items": [1, 2] }), "sales").is_empty());
    assert!(list_payload(json!({ "data": "nope" }), "sales").is_empty());
    assert!(list_payload(json!(42), "sales").is_empty());
    assert!(list_payload(Value::Null, "sales").is_empty());
  }

  #[derive(Debug, serde::Deserialize)]
  struct Named {
    name: String,
  }

  #[test]
  fn undecodable_records_are_skipped() {
    let payload = json!({ "data": [{ "name": "Kit" }, { "name": 5 }, { "other": true }, { "name": "Té" }] });
    let named: Vec<Named> = decode_list(payload, "products").unwrap();
    let names: Vec<&str> = named.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Kit", "Té"]);
  }

  #[test]
  fn single_shapes_unwrap() {
    let sale = json!({ "id": "s1", "saleNumber": "V-001" });
    assert_eq!(single_payload(sale.clone(), "sale").unwrap(), sale);
    assert_eq!(single_payload(json!([sale.clone()]), "sale").unwrap(), sale);
    assert_eq!(single_payload(json!({ "data": sale.clone() }), "sale").unwrap(), sale);
    assert_eq!(
      single_payload(json!({ "message": "ok", "sale": sale.clone() }), "sale").unwrap(),
      sale
    );
  }

  #[test]
  fn empty_single_is_not_found() {
    assert!(matches!(single_payload(json!([]), "product"), Err(PosError::NotFound(_))));
    assert!(matches!(single_payload(Value::Null, "product"), Err(PosError::NotFound(_))));
  }

  #[test]
  fn acks_accept_missing_bodies() {
    let ack = decode_ack(Value::Null).unwrap();
    assert!(ack.success);
    assert!(ack.message.is_none());

    let ack = decode_ack(json!({ "message": "Producto eliminado", "success": true })).unwrap();
    assert_eq!(ack.message.as_deref(), Some("Producto eliminado"));
  }
}
