// pos_admin/examples/offline_sale.rs
//
// Composes a sale and submits it through the sale-submission workflow,
// against the in-memory transport instead of a live API.

use pos_admin::http::HttpMethod;
use pos_admin::models::{PaymentMethod, Role};
use pos_admin::testing::{logged_in_session, mock_client, product_fixture, MockTransport};
use pos_admin::workflows::submit_sale;
use pos_admin::{PosResult, SaleComposer};
use rust_decimal_macros::dec;
use serde_json::json;
use tracing::info;

#[tokio::main]
async fn main() -> PosResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  let mock = MockTransport::new();
  mock.on(
    HttpMethod::Post,
    "/sales",
    201,
    json!({ "id": 1, "saleNumber": "V-0001", "total": 21500, "status": "completed", "saleDate": "2024-03-15" }),
  );
  let client = mock_client(&mock, logged_in_session(Role::User)?);

  let coffee = product_fixture("1", "Café 500g", dec!(12500));
  let sugar = product_fixture("2", "Azúcar 1kg", dec!(4500));

  let mut composer = SaleComposer::new();
  composer.add_product(&coffee);
  composer.add_product(&sugar);
  composer.add_product(&sugar);
  composer.set_discount_input("500")?;
  composer.set_payment_method(PaymentMethod::Cash);

  for line in composer.items() {
    info!(product = %line.product.name, quantity = line.quantity, total = %line.total, "Line");
  }
  info!(subtotal = %composer.subtotal(), discount = %composer.discount(), total = %composer.total(), "Draft");

  let sale = submit_sale(&client, &mut composer).await?;
  info!(sale_number = %sale.sale_number, cleared = composer.is_empty(), "Submitted");

  let sent = mock.last_request().map(|r| r.body.unwrap_or_default()).unwrap_or_default();
  info!(body = %sent, "Request body");
  Ok(())
}
