// pos_admin/src/services/mod.rs

//! One module per REST resource. Every function takes the shared
//! `ApiClient` and returns normalized, typed results.

pub mod auth_service;
pub mod products_service;
pub mod sales_service;
pub mod users_service;
