// tests/flow_execution_tests.rs
mod common;

use common::*;
use pos_admin::{ContextData, Flow, FlowControl, FlowOutcome, PosError};
use serial_test::serial;

#[derive(Clone, Debug, Default)]
struct TraceCtx {
  steps: Vec<String>,
}

fn recorder(step: &'static str) -> impl Fn(ContextData<TraceCtx>) -> std::future::Ready<Result<FlowControl, PosError>> + Send + Sync {
  move |ctx: ContextData<TraceCtx>| {
    ctx.write().steps.push(step.to_string());
    std::future::ready(Ok(FlowControl::Continue))
  }
}

#[tokio::test]
#[serial]
async fn steps_run_in_declared_order() {
  setup_tracing();
  let mut flow = Flow::<TraceCtx>::new("ordered", &[("a", false), ("b", false), ("c", false)]);
  flow.on_step("a", recorder("a"));
  flow.on_step("b", recorder("b"));
  flow.on_step("c", recorder("c"));

  let ctx = ContextData::new(TraceCtx::default());
  let outcome = flow.run(ctx.clone()).await.unwrap();

  assert_eq!(outcome, FlowOutcome::Completed);
  assert_eq!(ctx.read().steps, vec!["a", "b", "c"]);
}

#[tokio::test]
#[serial]
async fn stop_halts_remaining_steps() {
  setup_tracing();
  let mut flow = Flow::<TraceCtx>::new("stopping", &[("a", false), ("halt", false), ("c", false)]);
  flow.on_step("a", recorder("a"));
  flow.on_step("halt", |ctx: ContextData<TraceCtx>| async move {
    ctx.write().steps.push("halt".to_string());
    Ok::<_, PosError>(FlowControl::Stop)
  });
  flow.on_step("c", recorder("c"));

  let ctx = ContextData::new(TraceCtx::default());
  assert_eq!(flow.run(ctx.clone()).await.unwrap(), FlowOutcome::Stopped);
  assert_eq!(ctx.read().steps, vec!["a", "halt"]);
}

#[tokio::test]
#[serial]
async fn handler_error_is_returned_unchanged() {
  setup_tracing();
  let mut flow = Flow::<TraceCtx>::new("failing", &[("a", false), ("bad", false), ("c", false)]);
  flow.on_step("a", recorder("a"));
  flow.on_step("bad", |_ctx: ContextData<TraceCtx>| async move {
    Err::<FlowControl, _>(PosError::Validation("nope".to_string()))
  });
  flow.on_step("c", recorder("c"));

  let ctx = ContextData::new(TraceCtx::default());
  let err = flow.run(ctx.clone()).await.unwrap_err();

  assert!(matches!(err, PosError::Validation(ref m) if m == "nope"));
  assert_eq!(ctx.read().steps, vec!["a"]);
}

#[tokio::test]
#[serial]
async fn required_step_without_handler_fails() {
  setup_tracing();
  let mut flow = Flow::<TraceCtx>::new("incomplete", &[("a", false), ("missing", false)]);
  flow.on_step("a", recorder("a"));

  let err = flow.run(ContextData::new(TraceCtx::default())).await.unwrap_err();
  match err {
    PosError::Flow { step, .. } => assert_eq!(step, "missing"),
    other => panic!("unexpected error: {:?}", other),
  }
}

#[tokio::test]
#[serial]
async fn optional_step_without_handler_is_passed_over() {
  setup_tracing();
  let mut flow = Flow::<TraceCtx>::new("sparse", &[("a", false), ("maybe", true), ("z", false)]);
  flow.on_step("a", recorder("a"));
  flow.on_step("z", recorder("z"));

  assert_eq!(flow.step_names(), vec!["a", "maybe", "z"]);
  let ctx = ContextData::new(TraceCtx::default());
  assert_eq!(flow.run(ctx.clone()).await.unwrap(), FlowOutcome::Completed);
  assert_eq!(ctx.read().steps, vec!["a", "z"]);
}

#[test]
#[should_panic(expected = "has no step named")]
fn registering_unknown_step_panics() {
  let mut flow = Flow::<TraceCtx>::new("typo", &[("a", false)]);
  flow.on_step("b", recorder("b"));
}
