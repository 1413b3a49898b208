// pos_admin/src/services/sales_service.rs

use crate::error::PosResult;
use crate::http::{encode_segment, ApiClient};
use crate::models::{CreateSaleRequest, DeleteAck, Sale, SaleStatus, UpdateSaleRequest};
use crate::wire::{decode_ack, decode_list, decode_one};
use serde_json::json;
use tracing::{debug, info, instrument};

const RESOURCE: &str = "sales";
const SINGULAR: &str = "sale";

fn item_path(id: &str) -> String {
  format!("/sales/{}", encode_segment(id))
}

#[instrument(name = "sales_service::get_all", skip(client), err(Display))]
pub async fn get_all(client: &ApiClient) -> PosResult<Vec<Sale>> {
  let payload = client.get("/sales").await?;
  let sales: Vec<Sale> = decode_list(payload, RESOURCE)?;
  debug!(count = sales.len(), "Sales fetched.");
  Ok(sales)
}

#[instrument(name = "sales_service::get_by_id", skip(client), err(Display))]
pub async fn get_by_id(client: &ApiClient, id: &str) -> PosResult<Sale> {
  let payload = client.get(&item_path(id)).await?;
  decode_one(payload, SINGULAR)
}

#[instrument(
  name = "sales_service::create",
  skip(client, request),
  fields(items = request.items.len(), total = %request.total),
  err(Display)
)]
pub async fn create(client: &ApiClient, request: &CreateSaleRequest) -> PosResult<Sale> {
  let payload = client.post("/sales", request).await?;
  let sale: Sale = decode_one(payload, SINGULAR)?;
  info!(sale_id = %sale.id, sale_number = %sale.sale_number, "Sale registered.");
  Ok(sale)
}

#[instrument(name = "sales_service::update", skip(client, request), err(Display))]
pub async fn update(client: &ApiClient, id: &str, request: &UpdateSaleRequest) -> PosResult<Sale> {
  let payload = client.put(&item_path(id), request).await?;
  decode_one(payload, SINGULAR)
}

#[instrument(name = "sales_service::delete", skip(client), err(Display))]
pub async fn delete(client: &ApiClient, id: &str) -> PosResult<DeleteAck> {
  let payload = client.delete(&item_path(id)).await?;
  decode_ack(payload)
}

#[instrument(name = "sales_service::search", skip(client), err(Display))]
pub async fn search(client: &ApiClient, query: &str) -> PosResult<Vec<Sale>> {
  let payload = client.get_with_query("/sales/search", &[("q", query)]).await?;
  decode_list(payload, RESOURCE)
}

#[instrument(name = "sales_service::update_status", skip(client), fields(status = %status), err(Display))]
pub async fn update_status(client: &ApiClient, id: &str, status: &SaleStatus) -> PosResult<Sale> {
  let body = json!({ "status": status.as_str() });
  let payload = client.patch(&format!("{}/status", item_path(id)), Some(&body)).await?;
  decode_one(payload, SINGULAR)
}
