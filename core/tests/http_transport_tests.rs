// tests/http_transport_tests.rs
//
// End-to-end checks of the reqwest transport against a throwaway actix-web
// server bound to a random local port.
mod common;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use common::*;
use pos_admin::models::Role;
use pos_admin::services::{auth_service, products_service};
use pos_admin::testing::session_user;
use pos_admin::{ApiClient, PosError, SessionContext};
use serde_json::json;
use serial_test::serial;
use std::sync::Arc;
use std::time::Duration;

const TOKEN: &str = "live-token";

fn authorized(req: &HttpRequest) -> bool {
  req
    .headers()
    .get("Authorization")
    .and_then(|v| v.to_str().ok())
    .map_or(false, |v| v == format!("Bearer {}", TOKEN))
}

async fn list_products(req: HttpRequest) -> HttpResponse {
  if !authorized(&req) {
    return HttpResponse::Unauthorized().json(json!({ "message": "token required" }));
  }
  HttpResponse::Ok().json(json!({ "data": { "products": [product_json(1, "Arroz", "4200", 3)] } }))
}

async fn search_products(query: web::Query<std::collections::HashMap<String, String>>) -> HttpResponse {
  let term = query.get("q").cloned().unwrap_or_default();
  HttpResponse::Ok().json(json!([product_json(2, &term, "100", 1)]))
}

async fn delete_product() -> HttpResponse {
  HttpResponse::NoContent().finish()
}

async fn verify(req: HttpRequest) -> HttpResponse {
  if authorized(&req) {
    HttpResponse::Ok().json(json!({ "valid": true }))
  } else {
    HttpResponse::Unauthorized().finish()
  }
}

fn spawn_backend() -> String {
  let server = HttpServer::new(|| {
    App::new().service(
      web::scope("/api")
        .route("/products", web::get().to(list_products))
        .route("/products/search", web::get().to(search_products))
        .route("/products/{id}", web::delete().to(delete_product))
        .route("/auth/verify", web::get().to(verify)),
    )
  })
  .workers(1)
  .bind(("127.0.0.1", 0))
  .expect("bind test backend");
  let port = server.addrs()[0].port();
  actix_web::rt::spawn(server.run());
  format!("http://127.0.0.1:{}/api", port)
}

fn client_for(base_url: &str, token: Option<&str>) -> ApiClient {
  let session = SessionContext::in_memory();
  if let Some(token) = token {
    session.establish(token, &session_user(Role::Admin)).unwrap();
  }
  ApiClient::with_reqwest(base_url, Duration::from_secs(5), Arc::new(session)).unwrap()
}

#[actix_web::test]
#[serial]
async fn reqwest_transport_sends_bearer_and_unwraps_envelope() {
  setup_tracing();
  let base = spawn_backend();
  let client = client_for(&base, Some(TOKEN));

  let products = products_service::get_all(&client).await.unwrap();
  assert_eq!(products.len(), 1);
  assert_eq!(products[0].name, "Arroz");
  assert!(auth_service::verify(&client).await.unwrap());
}

#[actix_web::test]
#[serial]
async fn reqwest_transport_encodes_query_and_handles_empty_body() {
  setup_tracing();
  let base = spawn_backend();
  let client = client_for(&base, Some(TOKEN));

  let found = products_service::search(&client, "pan integral").await.unwrap();
  assert_eq!(found[0].name, "pan integral");

  let ack = products_service::delete(&client, "2").await.unwrap();
  assert!(ack.success);
}

#[actix_web::test]
#[serial]
async fn live_401_clears_session() {
  setup_tracing();
  let base = spawn_backend();
  let client = client_for(&base, Some("stale-token"));

  let err = products_service::get_all(&client).await.unwrap_err();
  assert!(matches!(err, PosError::Unauthorized));
  assert!(!client.session().is_authenticated());
}

#[actix_web::test]
#[serial]
async fn unreachable_backend_is_a_transport_error() {
  setup_tracing();
  let client = client_for("http://127.0.0.1:9/api", Some(TOKEN));
  let err = products_service::get_all(&client).await.unwrap_err();
  assert!(matches!(err, PosError::Transport(_)));
  assert!(client.session().is_authenticated());
}
