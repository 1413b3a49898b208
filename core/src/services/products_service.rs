// pos_admin/src/services/products_service.rs

use crate::error::PosResult;
use crate::http::{encode_segment, ApiClient};
use crate::models::{CreateProductRequest, DeleteAck, Product, UpdateProductRequest};
use crate::wire::{decode_ack, decode_list, decode_one};
use serde_json::json;
use tracing::{debug, info, instrument};

const RESOURCE: &str = "products";
const SINGULAR: &str = "product";

fn item_path(id: &str) -> String {
  format!("/products/{}", encode_segment(id))
}

#[instrument(name = "products_service::get_all", skip(client), err(Display))]
pub async fn get_all(client: &ApiClient) -> PosResult<Vec<Product>> {
  let payload = client.get("/products").await?;
  let products: Vec<Product> = decode_list(payload, RESOURCE)?;
  debug!(count = products.len(), "Products fetched.");
  Ok(products)
}

#[instrument(name = "products_service::get_by_id", skip(client), err(Display))]
pub async fn get_by_id(client: &ApiClient, id: &str) -> PosResult<Product> {
  let payload = client.get(&item_path(id)).await?;
  decode_one(payload, SINGULAR)
}

#[instrument(name = "products_service::create", skip(client, request), fields(name = %request.name), err(Display))]
pub async fn create(client: &ApiClient, request: &CreateProductRequest) -> PosResult<Product> {
  let payload = client.post("/products", request).await?;
  let product: Product = decode_one(payload, SINGULAR)?;
  info!(product_id = %product.id, "Product created.");
  Ok(product)
}

/// Full update (`PUT`).
#[instrument(name = "products_service::update", skip(client, request), err(Display))]
pub async fn update(client: &ApiClient, id: &str, request: &UpdateProductRequest) -> PosResult<Product> {
  let payload = client.put(&item_path(id), request).await?;
  decode_one(payload, SINGULAR)
}

/// Partial update (`PATCH`); only the fields set on `request` are sent.
#[instrument(name = "products_service::patch", skip(client, request), err(Display))]
pub async fn patch(client: &ApiClient, id: &str, request: &UpdateProductRequest) -> PosResult<Product> {
  let payload = client.patch(&item_path(id), Some(request)).await?;
  decode_one(payload, SINGULAR)
}

#[instrument(name = "products_service::delete", skip(client), err(Display))]
pub async fn delete(client: &ApiClient, id: &str) -> PosResult<DeleteAck> {
  let payload = client.delete(&item_path(id)).await?;
  let ack = decode_ack(payload)?;
  info!(product_id = id, success = ack.success, "Product deleted.");
  Ok(ack)
}

#[instrument(name = "products_service::search", skip(client), err(Display))]
pub async fn search(client: &ApiClient, query: &str) -> PosResult<Vec<Product>> {
  let payload = client.get_with_query("/products/search", &[("q", query)]).await?;
  decode_list(payload, RESOURCE)
}

#[instrument(name = "products_service::by_category", skip(client), err(Display))]
pub async fn by_category(client: &ApiClient, category: &str) -> PosResult<Vec<Product>> {
  let payload = client
    .get(&format!("/products/category/{}", encode_segment(category)))
    .await?;
  decode_list(payload, RESOURCE)
}

#[instrument(name = "products_service::update_status", skip(client), err(Display))]
pub async fn update_status(client: &ApiClient, id: &str, is_active: bool) -> PosResult<Product> {
  let body = json!({ "isActive": is_active });
  let payload = client.patch(&format!("{}/status", item_path(id)), Some(&body)).await?;
  decode_one(payload, SINGULAR)
}
