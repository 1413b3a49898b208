// pos_admin/src/flow/control.rs

//! Signals for controlling flow execution and the outcome of a run.

/// Returned by a step handler to continue or halt the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowControl {
  Continue,
  /// Halt immediately. Remaining handlers and steps do not run.
  Stop,
}

/// Outcome of a full flow run that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
  Completed,
  Stopped,
}
