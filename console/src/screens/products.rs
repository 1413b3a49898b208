// pos_admin_console/src/screens/products.rs

use super::{activity_flag, confirm, require};
use crate::cli::{ProductFieldArgs, ProductsAction};
use crate::errors::Result;
use crate::render::{active_label, format_cop, navigate, Table};
use crate::state::AppState;
use pos_admin::filters::filter_products;
use pos_admin::models::Product;
use pos_admin::services::products_service;
use pos_admin::{ProductForm, Route};
use std::io::Write;

pub async fn run(state: &AppState, action: ProductsAction, out: &mut dyn Write) -> Result<()> {
  match action {
    ProductsAction::List { search } => {
      require(state, &Route::Products)?;
      let products = products_service::get_all(&state.client).await?;
      let shown = filter_products(&products, search.as_deref().unwrap_or_default());
      write_table(out, &shown)?;
      writeln!(out, "{} of {} products", shown.len(), products.len())?;
    }
    ProductsAction::Show { id } => {
      require(state, &Route::ProductView(id.clone()))?;
      let product = products_service::get_by_id(&state.client, &id).await?;
      write_detail(out, &product)?;
    }
    ProductsAction::Search { query } => {
      require(state, &Route::Products)?;
      let products = products_service::search(&state.client, &query).await?;
      write_table(out, &products.iter().collect::<Vec<_>>())?;
    }
    ProductsAction::Category { category } => {
      require(state, &Route::Products)?;
      let products = products_service::by_category(&state.client, &category).await?;
      write_table(out, &products.iter().collect::<Vec<_>>())?;
    }
    ProductsAction::Add { fields, inactive } => {
      require(state, &Route::ProductAdd)?;
      let mut form = ProductForm::default();
      apply_fields(&mut form, fields);
      form.is_active = !inactive;
      let request = form.to_create_request()?;
      let product = products_service::create(&state.client, &request).await?;
      writeln!(out, "Product created: {} ({})", product.name, product.id)?;
      navigate(out, &Route::Products)?;
    }
    ProductsAction::Edit {
      id,
      fields,
      active,
      inactive,
    } => {
      require(state, &Route::ProductEdit(id.clone()))?;
      let current = products_service::get_by_id(&state.client, &id).await?;
      let mut form = ProductForm::from_product(&current);
      apply_fields(&mut form, fields);
      if let Some(flag) = activity_flag(active, inactive) {
        form.is_active = flag;
      }
      let request = form.to_update_request()?;
      let product = products_service::update(&state.client, &id, &request).await?;
      writeln!(out, "Product updated: {} ({})", product.name, product.id)?;
      navigate(out, &Route::Products)?;
    }
    ProductsAction::Delete { id, yes } => {
      require(state, &Route::Products)?;
      confirm(yes, &format!("product {}", id))?;
      let ack = products_service::delete(&state.client, &id).await?;
      let message = ack.message.unwrap_or_else(|| format!("Product {} deleted.", id));
      writeln!(out, "{}", message)?;
      navigate(out, &Route::Products)?;
    }
    ProductsAction::Status { id, state: activity } => {
      require(state, &Route::Products)?;
      let product = products_service::update_status(&state.client, &id, activity.is_active()).await?;
      writeln!(out, "{} is now {}.", product.name, active_label(product.is_active).to_lowercase())?;
    }
  }
  Ok(())
}

fn apply_fields(form: &mut ProductForm, fields: ProductFieldArgs) {
  if let Some(name) = fields.name {
    form.name = name;
  }
  if let Some(price) = fields.price {
    form.price = price;
  }
  if let Some(stock) = fields.stock {
    form.stock = stock;
  }
  if let Some(description) = fields.description {
    form.description = description;
  }
  if let Some(sku) = fields.sku {
    form.sku = sku;
  }
}

pub(crate) fn write_table(out: &mut dyn Write, products: &[&Product]) -> std::io::Result<()> {
  if products.is_empty() {
    return writeln!(out, "No products found.");
  }
  let mut table = Table::new(&["ID", "Name", "SKU", "Price", "Stock", "Status"]);
  for p in products {
    table.row(vec![
      p.id.clone(),
      p.name.clone(),
      p.sku.clone().unwrap_or_else(|| "-".to_string()),
      format_cop(p.price),
      p.stock.to_string(),
      active_label(p.is_active).to_string(),
    ]);
  }
  table.write_to(out)
}

fn write_detail(out: &mut dyn Write, p: &Product) -> std::io::Result<()> {
  writeln!(out, "ID:          {}", p.id)?;
  writeln!(out, "Name:        {}", p.name)?;
  writeln!(out, "Description: {}", p.description.as_deref().unwrap_or("-"))?;
  writeln!(out, "SKU:         {}", p.sku.as_deref().unwrap_or("-"))?;
  writeln!(out, "Price:       {}", format_cop(p.price))?;
  writeln!(out, "Stock:       {}", p.stock)?;
  writeln!(out, "Status:      {}", active_label(p.is_active))?;
  if let Some(created) = p.created_at {
    writeln!(out, "Created:     {}", created.format("%Y-%m-%d %H:%M"))?;
  }
  if let Some(updated) = p.updated_at {
    writeln!(out, "Updated:     {}", updated.format("%Y-%m-%d %H:%M"))?;
  }
  Ok(())
}
