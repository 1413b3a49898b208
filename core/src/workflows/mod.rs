// pos_admin/src/workflows/mod.rs

//! Multi-step operations expressed as flows over a shared context.

pub mod contexts;
pub mod sale_workflow;
pub mod signin_workflow;

pub use sale_workflow::{sale_submission_flow, submit_sale};
pub use signin_workflow::{sign_in, signin_flow};
