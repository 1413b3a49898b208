// pos_admin/src/wire/mod.rs

//! Wire-format helpers: lenient numeric decoding and envelope unwrapping.
//! Every service response passes through here before reaching a model.

pub mod coerce;
pub mod envelope;

pub use envelope::{decode_ack, decode_list, decode_one, list_payload, single_payload};
