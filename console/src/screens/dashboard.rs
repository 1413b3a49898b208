// pos_admin_console/src/screens/dashboard.rs

use super::require;
use crate::errors::Result;
use crate::render::{format_cop, Table};
use crate::state::AppState;
use pos_admin::models::{Sale, SaleStatus};
use pos_admin::services::{products_service, sales_service};
use pos_admin::{DashboardSummary, Route};
use std::io::Write;

const RECENT_SALES: usize = 5;

pub async fn show(state: &AppState, out: &mut dyn Write) -> Result<()> {
  require(state, &Route::Dashboard)?;

  let (products, sales) = tokio::try_join!(
    products_service::get_all(&state.client),
    sales_service::get_all(&state.client)
  )?;
  let summary = DashboardSummary::compute(&products, &sales);

  if let Some(user) = state.session().current_user() {
    writeln!(out, "Hello, {}.", user.display_name())?;
  }
  writeln!(
    out,
    "Products:     {} ({} active, {} out of stock)",
    summary.product_count, summary.active_products, summary.out_of_stock
  )?;
  writeln!(out, "Sales:        {}", summary.sale_count)?;
  for status in [SaleStatus::Pending, SaleStatus::Completed, SaleStatus::Cancelled] {
    writeln!(out, "  {:<12}{}", status.label(), summary.count_for(&status))?;
  }
  writeln!(out, "Revenue:      {}", format_cop(summary.revenue))?;

  let recent = recent_sales(&sales, RECENT_SALES);
  if !recent.is_empty() {
    writeln!(out)?;
    writeln!(out, "Recent sales")?;
    let mut table = Table::new(&["Number", "Date", "Total", "Status"]);
    for s in recent {
      table.row(vec![
        s.sale_number.clone(),
        s.sale_day().to_string(),
        format_cop(s.total),
        s.status.label().to_string(),
      ]);
    }
    table.write_to(out)?;
  }
  Ok(())
}

/// Newest first, by creation time when present and sale date otherwise.
fn recent_sales(sales: &[Sale], limit: usize) -> Vec<&Sale> {
  let mut sorted: Vec<&Sale> = sales.iter().collect();
  sorted.sort_by(|a, b| {
    b.created_at
      .cmp(&a.created_at)
      .then_with(|| b.sale_date.cmp(&a.sale_date))
  });
  sorted.truncate(limit);
  sorted
}
