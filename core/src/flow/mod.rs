// pos_admin/src/flow/mod.rs

//! A small step-flow engine for multi-step console operations.
//!
//! A `Flow<T>` is an ordered list of named steps. Each step carries one or
//! more async handlers that receive the shared `ContextData<T>` and answer
//! `FlowControl::Continue` or `FlowControl::Stop`. The first handler error
//! aborts the run and is returned unchanged.

pub mod context_data;
pub mod control;
pub mod definition;
pub mod execution;
pub mod step;

pub use context_data::ContextData;
pub use control::{FlowControl, FlowOutcome};
pub use definition::{Flow, Handler, StepFuture};
pub use step::StepDef;
