// pos_admin/src/sale/mod.rs

pub mod composer;

pub use composer::{LineItem, SaleComposer, DEFAULT_CLIENT_NAME};
