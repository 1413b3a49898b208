// pos_admin/src/flow/definition.rs

//! The `Flow<T>` definition and the methods used to assemble it.

use super::context_data::ContextData;
use super::control::FlowControl;
use super::step::StepDef;
use crate::error::PosResult;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

pub type StepFuture = Pin<Box<dyn Future<Output = PosResult<FlowControl>> + Send>>;

/// A boxed step handler over the flow's context type.
pub type Handler<T> = Box<dyn Fn(ContextData<T>) -> StepFuture + Send + Sync>;

pub struct Flow<T>
where
  T: 'static + Send + Sync,
{
  pub(crate) name: String,
  pub(crate) steps: Vec<StepDef>,
  pub(crate) handlers: HashMap<String, Vec<Handler<T>>>,
}

impl<T> Flow<T>
where
  T: 'static + Send + Sync,
{
  /// Creates a flow from `(step_name, optional)` pairs, in execution order.
  pub fn new<S: Into<String>>(name: S, step_defs: &[(&str, bool)]) -> Self {
    let steps = step_defs
      .iter()
      .map(|(step_name, optional)| StepDef {
        name: (*step_name).to_string(),
        optional: *optional,
      })
      .collect();

    Self {
      name: name.into(),
      steps,
      handlers: HashMap::new(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  // A misspelled step name is a programming error, not a runtime condition.
  fn ensure_step_exists(&self, step_name: &str) {
    if !self.steps.iter().any(|s| s.name == step_name) {
      panic!("Flow '{}' has no step named '{}'.", self.name, step_name);
    }
  }

  /// Registers a handler for `step_name`. Handlers of one step run in
  /// registration order.
  pub fn on_step<F, Fut>(&mut self, step_name: &str, handler: F)
  where
    F: Fn(ContextData<T>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = PosResult<FlowControl>> + Send + 'static,
  {
    self.ensure_step_exists(step_name);
    let boxed: Handler<T> = Box::new(move |ctx: ContextData<T>| Box::pin(handler(ctx)));
    self.handlers.entry(step_name.to_string()).or_default().push(boxed);
  }
}
