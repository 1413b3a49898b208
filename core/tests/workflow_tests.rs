// tests/workflow_tests.rs
mod common;

use common::*;
use pos_admin::http::HttpMethod;
use pos_admin::models::{PaymentMethod, Role, SaleStatus};
use pos_admin::services::auth_service::DEFAULT_LOGIN_PATH;
use pos_admin::testing::product_fixture;
use pos_admin::workflows::{sign_in, submit_sale};
use pos_admin::{PosError, SaleComposer};
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::json;
use serial_test::serial;

fn composer_with_two_lines() -> SaleComposer {
  let mut composer = SaleComposer::starting_on(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
  composer.add_product(&product_fixture("1", "Café", dec!(5000)));
  composer.add_product(&product_fixture("2", "Azúcar", dec!(3000)));
  composer.set_discount(dec!(1000)).unwrap();
  composer.set_payment_method(PaymentMethod::Transfer);
  composer.set_observations("  entregar en bodega ");
  composer
}

#[tokio::test]
#[serial]
async fn sign_in_stores_token_and_profile() {
  setup_tracing();
  let (mock, client) = logged_out();
  mock.on(
    HttpMethod::Post,
    DEFAULT_LOGIN_PATH,
    200,
    json!({ "token": "jwt-abc", "user": { "id": 1, "email": "ana@tienda.co", "name": "Ana", "role": "admin" } }),
  );

  let user = sign_in(&client, DEFAULT_LOGIN_PATH, " ana@tienda.co ", "secreto").await.unwrap();
  assert!(user.is_admin());
  assert_eq!(client.session().token().as_deref(), Some("jwt-abc"));
  assert_eq!(client.session().current_user().unwrap().id, "1");

  let request = mock.last_request().unwrap();
  assert!(request.bearer.is_none());
  assert_eq!(request.body.unwrap(), json!({ "email": "ana@tienda.co", "password": "secreto" }));
}

#[tokio::test]
#[serial]
async fn sign_in_accepts_data_envelope_on_legacy_path() {
  setup_tracing();
  let (mock, client) = logged_out();
  mock.on(
    HttpMethod::Post,
    "/users/login",
    200,
    json!({ "data": { "token": "jwt-legacy", "user": { "id": "u-9", "email": "luis@tienda.co", "role": "user" } } }),
  );

  let user = sign_in(&client, "/users/login", "luis@tienda.co", "secreto").await.unwrap();
  assert!(!user.is_admin());
  assert_eq!(user.display_name(), "luis@tienda.co");
}

#[tokio::test]
#[serial]
async fn blank_credentials_never_reach_the_api() {
  setup_tracing();
  let (mock, client) = logged_out();
  let err = sign_in(&client, DEFAULT_LOGIN_PATH, "", "").await.unwrap_err();
  assert!(matches!(err, PosError::InvalidForm(_)));
  assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
#[serial]
async fn rejected_credentials_keep_session_empty() {
  setup_tracing();
  let (mock, client) = logged_out();
  mock.on(HttpMethod::Post, DEFAULT_LOGIN_PATH, 401, json!({ "message": "Credenciales inválidas" }));

  let err = sign_in(&client, DEFAULT_LOGIN_PATH, "ana@tienda.co", "mal").await.unwrap_err();
  assert!(matches!(err, PosError::Api { status: 401, ref message } if message == "Credenciales inválidas"));
  assert!(!client.session().is_authenticated());
}

#[tokio::test]
#[serial]
async fn submitted_sale_clears_composer() {
  setup_tracing();
  let (mock, client) = logged_in(Role::User);
  mock.on(HttpMethod::Post, "/sales", 201, json!({ "sale": sale_json(31, "V-0031", "7000", "completed") }));

  let mut composer = composer_with_two_lines();
  let sale = submit_sale(&client, &mut composer).await.unwrap();

  assert_eq!(sale.sale_number, "V-0031");
  assert_eq!(sale.total, dec!(7000));
  assert_eq!(sale.status, SaleStatus::Completed);
  assert!(composer.is_empty());
  assert_eq!(composer.discount(), dec!(0));

  let body = mock.last_request().unwrap().body.unwrap();
  assert_eq!(body["clientName"], json!("Cliente General"));
  assert_eq!(body["saleDate"], json!("2024-03-15"));
  assert_eq!(body["paymentMethod"], json!("Transferencia"));
  assert_eq!(body["subtotal"], json!(8000));
  assert_eq!(body["discount"], json!(1000));
  assert_eq!(body["total"], json!(7000));
  assert_eq!(body["observations"], json!("entregar en bodega"));
  assert_eq!(
    body["items"],
    json!([
      { "productId": "1", "quantity": 1, "unitPrice": 5000, "subtotal": 5000 },
      { "productId": "2", "quantity": 1, "unitPrice": 3000, "subtotal": 3000 }
    ])
  );
}

#[tokio::test]
#[serial]
async fn failed_submission_leaves_composer_intact() {
  setup_tracing();
  let (mock, client) = logged_in(Role::User);
  mock.on(HttpMethod::Post, "/sales", 500, json!({ "error": "database unavailable" }));

  let mut composer = composer_with_two_lines();
  let err = submit_sale(&client, &mut composer).await.unwrap_err();

  assert!(matches!(err, PosError::Api { status: 500, .. }));
  assert_eq!(composer.items().len(), 2);
  assert_eq!(composer.total(), dec!(7000));
  assert_eq!(mock.request_count(), 1);
}

#[tokio::test]
#[serial]
async fn empty_sale_is_rejected_without_network_call() {
  setup_tracing();
  let (mock, client) = logged_in(Role::User);
  let mut composer = SaleComposer::new();

  let err = submit_sale(&client, &mut composer).await.unwrap_err();
  assert!(err.is_client_side());
  assert_eq!(mock.request_count(), 0);
}
