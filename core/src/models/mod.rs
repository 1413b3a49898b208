// pos_admin/src/models/mod.rs

//! Entities and request DTOs as they travel over the wire (camelCase JSON).

pub mod ack;
pub mod auth;
pub mod product;
pub mod sale;
pub mod user;

pub use ack::DeleteAck;
pub use auth::{LoginCredentials, LoginResponse, SessionUser};
pub use product::{CreateProductRequest, Product, UpdateProductRequest};
pub use sale::{CreateSaleRequest, PaymentMethod, Sale, SaleItemRequest, SaleStatus, UpdateSaleRequest};
pub use user::{CreateUserRequest, Role, UpdateUserRequest, User};
