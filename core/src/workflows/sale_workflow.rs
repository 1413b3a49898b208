// pos_admin/src/workflows/sale_workflow.rs

use crate::error::{PosError, PosResult};
use crate::flow::{ContextData, Flow, FlowControl, FlowOutcome};
use crate::http::ApiClient;
use crate::models::Sale;
use crate::sale::SaleComposer;
use crate::services::sales_service;
use crate::workflows::contexts::SaleSubmissionCtxData;
use tracing::{event, info, instrument, Level};

pub const VALIDATE_SALE_DRAFT: &str = "validate_sale_draft";
pub const BUILD_SALE_REQUEST: &str = "build_sale_request";
pub const POST_SALE: &str = "post_sale";
pub const CLEAR_SALE_DRAFT: &str = "clear_sale_draft";

pub fn sale_submission_flow() -> Flow<SaleSubmissionCtxData> {
  let mut flow = Flow::new(
    "sale_submission",
    &[
      (VALIDATE_SALE_DRAFT, false),
      (BUILD_SALE_REQUEST, false),
      (POST_SALE, false),
      (CLEAR_SALE_DRAFT, false),
    ],
  );

  flow.on_step(VALIDATE_SALE_DRAFT, |ctx: ContextData<SaleSubmissionCtxData>| async move {
    ctx.with(|d| d.draft.validate())?;
    Ok::<_, PosError>(FlowControl::Continue)
  });

  flow.on_step(BUILD_SALE_REQUEST, |ctx: ContextData<SaleSubmissionCtxData>| async move {
    let request = ctx.with(|d| d.draft.build_request())?;
    event!(
      Level::DEBUG,
      items = request.items.len(),
      subtotal = %request.subtotal,
      discount = %request.discount,
      total = %request.total,
      "Sale request built."
    );
    ctx.write().request = Some(request);
    Ok::<_, PosError>(FlowControl::Continue)
  });

  flow.on_step(POST_SALE, |ctx: ContextData<SaleSubmissionCtxData>| async move {
    let (client, request) = {
      let guard = ctx.read();
      (guard.client.clone(), guard.request.clone())
    };
    let request = request.ok_or_else(|| PosError::Flow {
      step: POST_SALE.to_string(),
      message: "sale request was not built".to_string(),
    })?;

    let sale = sales_service::create(&client, &request).await?;
    ctx.write().created = Some(sale);
    Ok::<_, PosError>(FlowControl::Continue)
  });

  flow.on_step(CLEAR_SALE_DRAFT, |ctx: ContextData<SaleSubmissionCtxData>| async move {
    let mut guard = ctx.write();
    guard.draft.clear();
    guard.draft_cleared = true;
    Ok::<_, PosError>(FlowControl::Continue)
  });

  flow
}

/// Validates, posts and, on success, clears `composer`. On any failure the
/// composer is left exactly as it was so the user can retry.
#[instrument(name = "workflows::submit_sale", skip_all, fields(items = composer.items().len()), err(Display))]
pub async fn submit_sale(client: &ApiClient, composer: &mut SaleComposer) -> PosResult<Sale> {
  let ctx = ContextData::new(SaleSubmissionCtxData::new(client.clone(), composer.clone()));
  match sale_submission_flow().run(ctx.clone()).await? {
    FlowOutcome::Completed => {}
    FlowOutcome::Stopped => return Err(PosError::Internal("sale submission stopped early".to_string())),
  }

  let (sale, draft, cleared) = {
    let mut guard = ctx.write();
    (guard.created.take(), guard.draft.clone(), guard.draft_cleared)
  };
  let sale = sale.ok_or_else(|| PosError::Internal("sale submission completed without a sale".to_string()))?;
  if cleared {
    *composer = draft;
  }
  info!(sale_id = %sale.id, "Sale submitted; draft cleared.");
  Ok(sale)
}
