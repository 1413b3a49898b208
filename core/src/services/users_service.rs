// pos_admin/src/services/users_service.rs

use crate::error::PosResult;
use crate::http::{encode_segment, ApiClient};
use crate::models::{CreateUserRequest, DeleteAck, UpdateUserRequest, User};
use crate::wire::{decode_ack, decode_list, decode_one};
use serde_json::Value;
use tracing::{info, instrument};

const RESOURCE: &str = "users";
const SINGULAR: &str = "user";

fn item_path(id: &str) -> String {
  format!("/users/{}", encode_segment(id))
}

#[instrument(name = "users_service::get_all", skip(client), err(Display))]
pub async fn get_all(client: &ApiClient) -> PosResult<Vec<User>> {
  let payload = client.get("/users").await?;
  decode_list(payload, RESOURCE)
}

#[instrument(name = "users_service::get_by_id", skip(client), err(Display))]
pub async fn get_by_id(client: &ApiClient, id: &str) -> PosResult<User> {
  let payload = client.get(&item_path(id)).await?;
  decode_one(payload, SINGULAR)
}

#[instrument(name = "users_service::create", skip(client, request), fields(email = %request.email), err(Display))]
pub async fn create(client: &ApiClient, request: &CreateUserRequest) -> PosResult<User> {
  let payload = client.post("/users", request).await?;
  let user: User = decode_one(payload, SINGULAR)?;
  info!(user_id = %user.id, role = %user.role, "User created.");
  Ok(user)
}

#[instrument(name = "users_service::update", skip(client, request), err(Display))]
pub async fn update(client: &ApiClient, id: &str, request: &UpdateUserRequest) -> PosResult<User> {
  let payload = client.put(&item_path(id), request).await?;
  decode_one(payload, SINGULAR)
}

#[instrument(name = "users_service::delete", skip(client), err(Display))]
pub async fn delete(client: &ApiClient, id: &str) -> PosResult<DeleteAck> {
  let payload = client.delete(&item_path(id)).await?;
  decode_ack(payload)
}

#[instrument(name = "users_service::toggle_active", skip(client), err(Display))]
pub async fn toggle_active(client: &ApiClient, id: &str) -> PosResult<User> {
  let payload = client
    .patch::<Value>(&format!("{}/toggle-active", item_path(id)), None)
    .await?;
  decode_one(payload, SINGULAR)
}
