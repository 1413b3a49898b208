// pos_admin_console/src/screens/sales.rs

use super::{confirm, require};
use crate::cli::{NewSaleArgs, SalesAction};
use crate::errors::{ConsoleError, Result};
use crate::render::{format_cop, navigate, Table};
use crate::state::AppState;
use chrono::NaiveDate;
use pos_admin::filters::{filter_sales, sale_catalog};
use pos_admin::models::{PaymentMethod, Sale, SaleStatus};
use pos_admin::services::{products_service, sales_service};
use pos_admin::workflows::submit_sale;
use pos_admin::{Route, SaleComposer};
use std::io::Write;
use tracing::info;

pub async fn run(state: &AppState, action: SalesAction, out: &mut dyn Write) -> Result<()> {
  match action {
    SalesAction::List { search, status } => {
      require(state, &Route::Sales)?;
      let status = status.as_deref().map(parse_status).transpose()?;
      let sales = sales_service::get_all(&state.client).await?;
      let shown = filter_sales(&sales, search.as_deref().unwrap_or_default(), status.as_ref());
      write_table(out, &shown)?;
      writeln!(out, "{} of {} sales", shown.len(), sales.len())?;
    }
    SalesAction::Show { id } => {
      require(state, &Route::SaleView(id.clone()))?;
      let sale = sales_service::get_by_id(&state.client, &id).await?;
      write_detail(out, &sale)?;
    }
    SalesAction::Delete { id, yes } => {
      require(state, &Route::Sales)?;
      confirm(yes, &format!("sale {}", id))?;
      let ack = sales_service::delete(&state.client, &id).await?;
      let message = ack.message.unwrap_or_else(|| format!("Sale {} deleted.", id));
      writeln!(out, "{}", message)?;
      navigate(out, &Route::Sales)?;
    }
    SalesAction::Status { id, status } => {
      require(state, &Route::Sales)?;
      let status = parse_status(&status)?;
      let sale = sales_service::update_status(&state.client, &id, &status).await?;
      writeln!(out, "Sale {} is now {}.", sale.sale_number, sale.status.label())?;
    }
    SalesAction::New(args) => new_sale(state, args, out).await?,
  }
  Ok(())
}

/// Only the three known statuses can be set or filtered on.
fn parse_status(raw: &str) -> Result<SaleStatus> {
  match SaleStatus::from(raw.trim().to_string()) {
    SaleStatus::Other(other) => Err(ConsoleError::Input(format!(
      "unknown status '{}' (expected pending, completed or cancelled)",
      other
    ))),
    known => Ok(known),
  }
}

/// `ID` or `ID:QTY`. Repeated ids add up.
fn parse_items(raw_items: &[String]) -> Result<Vec<(String, i64)>> {
  let mut items: Vec<(String, i64)> = Vec::new();
  for raw in raw_items {
    let (id, qty) = match raw.split_once(':') {
      Some((id, qty)) => {
        let qty = qty
          .trim()
          .parse::<i64>()
          .ok()
          .filter(|q| *q > 0)
          .ok_or_else(|| ConsoleError::Input(format!("invalid quantity in '{}'", raw)))?;
        (id.trim(), qty)
      }
      None => (raw.trim(), 1),
    };
    if id.is_empty() {
      return Err(ConsoleError::Input(format!("missing product id in '{}'", raw)));
    }
    match items.iter_mut().find(|(existing, _)| existing == id) {
      Some((_, total)) => *total += qty,
      None => items.push((id.to_string(), qty)),
    }
  }
  Ok(items)
}

async fn new_sale(state: &AppState, args: NewSaleArgs, out: &mut dyn Write) -> Result<()> {
  require(state, &Route::SaleNew)?;
  let items = parse_items(&args.items)?;

  let mut composer = SaleComposer::new();
  if let Some(client) = args.client {
    composer.set_client_name(client);
  }
  if let Some(payment) = args.payment {
    let method = payment.parse::<PaymentMethod>().map_err(ConsoleError::Input)?;
    composer.set_payment_method(method);
  }
  if let Some(date) = args.date {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
      .map_err(|e| ConsoleError::Input(format!("invalid date '{}': {}", date, e)))?;
    composer.set_sale_date(date);
  }
  if let Some(discount) = args.discount {
    composer.set_discount_input(&discount)?;
  }
  if let Some(observations) = args.observations {
    composer.set_observations(observations);
  }

  let products = products_service::get_all(&state.client).await?;
  let catalog = sale_catalog(&products, "");
  for (id, qty) in &items {
    let product = catalog
      .iter()
      .find(|p| &p.id == id)
      .ok_or_else(|| ConsoleError::Input(format!("product {} not found or inactive", id)))?;
    composer.add_product(product);
    composer.set_quantity(id, *qty);
  }

  write_draft(out, &composer)?;
  if args.dry_run {
    writeln!(out, "Dry run: sale not registered.")?;
    return Ok(());
  }

  let sale = submit_sale(&state.client, &mut composer).await?;
  info!(sale_id = %sale.id, "Sale registered from console.");
  writeln!(out, "Sale registered: {} ({})", sale.sale_number, format_cop(sale.total))?;
  navigate(out, &Route::Sales)?;
  Ok(())
}

fn write_draft(out: &mut dyn Write, composer: &SaleComposer) -> std::io::Result<()> {
  writeln!(out, "Client:  {}", composer.client_name())?;
  writeln!(out, "Date:    {}", composer.sale_date().format("%Y-%m-%d"))?;
  writeln!(out, "Payment: {}", composer.payment_method())?;
  let mut table = Table::new(&["Product", "Qty", "Unit price", "Total"]);
  for line in composer.items() {
    table.row(vec![
      line.product.name.clone(),
      line.quantity.to_string(),
      format_cop(line.unit_price),
      format_cop(line.total),
    ]);
  }
  table.write_to(out)?;
  writeln!(out, "Subtotal: {}", format_cop(composer.subtotal()))?;
  writeln!(out, "Discount: {}", format_cop(composer.discount()))?;
  writeln!(out, "Total:    {}", format_cop(composer.total()))?;
  if !composer.observations().trim().is_empty() {
    writeln!(out, "Notes:    {}", composer.observations().trim())?;
  }
  Ok(())
}

fn write_table(out: &mut dyn Write, sales: &[&Sale]) -> std::io::Result<()> {
  if sales.is_empty() {
    return writeln!(out, "No sales found.");
  }
  let mut table = Table::new(&["ID", "Number", "Date", "Total", "Status"]);
  for s in sales {
    table.row(vec![
      s.id.clone(),
      s.sale_number.clone(),
      s.sale_day().to_string(),
      format_cop(s.total),
      s.status.label().to_string(),
    ]);
  }
  table.write_to(out)
}

fn write_detail(out: &mut dyn Write, s: &Sale) -> std::io::Result<()> {
  writeln!(out, "ID:      {}", s.id)?;
  writeln!(out, "Number:  {}", s.sale_number)?;
  writeln!(out, "Date:    {}", s.sale_day())?;
  writeln!(out, "Total:   {}", format_cop(s.total))?;
  writeln!(out, "Status:  {}", s.status.label())?;
  writeln!(out, "Seller:  {}", s.user_id.as_deref().unwrap_or("-"))?;
  if let Some(created) = s.created_at {
    writeln!(out, "Created: {}", created.format("%Y-%m-%d %H:%M"))?;
  }
  Ok(())
}
