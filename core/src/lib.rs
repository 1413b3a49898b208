// pos_admin/src/lib.rs

//! Typed client library for a retail point-of-sale admin API.
//!
//! The pieces:
//!  - `models` and `wire`: entities as sent over the wire, with lenient
//!    numeric decoding and envelope unwrapping.
//!  - `session` and `http`: the persisted session context and the
//!    bearer-token client that clears it on a 401.
//!  - `services`: one module per REST resource.
//!  - `guard`: screen routes and the session/role check in front of them.
//!  - `sale`: the running cart used to compose a new sale.
//!  - `forms`, `filters`, `dashboard`: validation, list filtering and summary
//!    numbers for the console screens.
//!  - `flow` and `workflows`: a named-step flow engine and the sign-in and
//!    sale-submission flows built on it.

pub mod dashboard;
pub mod error;
pub mod filters;
pub mod flow;
pub mod forms;
pub mod guard;
pub mod http;
pub mod models;
pub mod sale;
pub mod services;
pub mod session;
pub mod wire;
pub mod workflows;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use crate::dashboard::DashboardSummary;
pub use crate::error::{PosError, PosResult};
pub use crate::flow::{ContextData, Flow, FlowControl, FlowOutcome};
pub use crate::forms::{FieldErrors, FormMode, ProductForm, UserForm};
pub use crate::guard::{check_access, AccessDecision, Route};
pub use crate::http::{ApiClient, ReqwestTransport, Transport};
pub use crate::sale::{LineItem, SaleComposer};
pub use crate::session::{FileSessionStore, MemorySessionStore, ProfileState, SessionContext, SessionStore};
