// pos_admin/src/flow/execution.rs

//! `Flow::run()`: walks the steps in order and drives their handlers.

use super::context_data::ContextData;
use super::control::{FlowControl, FlowOutcome};
use super::definition::Flow;
use crate::error::{PosError, PosResult};
use tracing::{event, instrument, span, Instrument, Level};

impl<T> Flow<T>
where
  T: 'static + Send + Sync,
{
  /// Executes every step against `ctx`.
  ///
  /// A non-optional step without handlers fails the run with
  /// `PosError::Flow`; handler errors are returned as they were raised.
  #[instrument(
    name = "Flow::run",
    skip_all,
    fields(flow = %self.name, num_steps = self.steps.len()),
    err(Display)
  )]
  pub async fn run(&self, ctx: ContextData<T>) -> PosResult<FlowOutcome> {
    event!(Level::DEBUG, "Flow execution starting.");

    for (step_idx, step_def) in self.steps.iter().enumerate() {
      let step_span = span!(
        Level::INFO,
        "flow_step",
        step_name = step_def.name.as_str(),
        step_index = step_idx,
        optional = step_def.optional
      );

      let handlers = match self.handlers.get(&step_def.name) {
        Some(handlers) if !handlers.is_empty() => handlers,
        _ if step_def.optional => {
          step_span.in_scope(|| event!(Level::DEBUG, "Optional step has no handlers, skipping."));
          continue;
        }
        _ => {
          step_span.in_scope(|| event!(Level::ERROR, "Required step has no handlers."));
          return Err(PosError::Flow {
            step: step_def.name.clone(),
            message: "no handler registered".to_string(),
          });
        }
      };

      for handler_fn in handlers {
        match handler_fn(ctx.clone()).instrument(step_span.clone()).await {
          Ok(FlowControl::Continue) => {}
          Ok(FlowControl::Stop) => {
            step_span.in_scope(|| event!(Level::INFO, "Flow stopped by a handler."));
            return Ok(FlowOutcome::Stopped);
          }
          Err(e) => {
            step_span.in_scope(|| event!(Level::WARN, error = %e, "Step handler failed."));
            return Err(e);
          }
        }
      }
    }

    event!(Level::DEBUG, "Flow execution completed.");
    Ok(FlowOutcome::Completed)
  }
}
