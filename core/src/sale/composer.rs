// pos_admin/src/sale/composer.rs

//! The running cart behind the new-sale screen.
//!
//! Line items are keyed by product id (one entry per product) and keep the
//! unit price captured when the product was first added. After every
//! mutation `subtotal == Σ line totals` and `total == subtotal - discount`.

use crate::error::{PosError, PosResult};
use crate::models::{CreateSaleRequest, PaymentMethod, Product, SaleItemRequest};
use crate::wire::coerce::parse_decimal;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, warn};

pub const DEFAULT_CLIENT_NAME: &str = "Cliente General";

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
  pub product: Product,
  pub quantity: u32,
  pub unit_price: Decimal,
  pub total: Decimal,
}

impl LineItem {
  fn new(product: &Product) -> Self {
    Self {
      product: product.clone(),
      quantity: 1,
      unit_price: product.price,
      total: product.price,
    }
  }

  fn set_quantity(&mut self, quantity: u32) {
    self.quantity = quantity;
    self.total = self.unit_price * Decimal::from(quantity);
  }
}

#[derive(Debug, Clone)]
pub struct SaleComposer {
  items: Vec<LineItem>,
  discount: Decimal,
  client_name: String,
  sale_date: NaiveDate,
  payment_method: PaymentMethod,
  observations: String,
}

impl Default for SaleComposer {
  fn default() -> Self {
    Self::new()
  }
}

impl SaleComposer {
  /// An empty sale dated today.
  pub fn new() -> Self {
    Self::starting_on(Local::now().date_naive())
  }

  pub fn starting_on(sale_date: NaiveDate) -> Self {
    Self {
      items: Vec::new(),
      discount: Decimal::ZERO,
      client_name: DEFAULT_CLIENT_NAME.to_string(),
      sale_date,
      payment_method: PaymentMethod::default(),
      observations: String::new(),
    }
  }

  pub fn items(&self) -> &[LineItem] {
    &self.items
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Units across all line items.
  pub fn unit_count(&self) -> u64 {
    self.items.iter().map(|i| u64::from(i.quantity)).sum()
  }

  pub fn line(&self, product_id: &str) -> Option<&LineItem> {
    self.items.iter().find(|i| i.product.id == product_id)
  }

  pub fn add_product(&mut self, product: &Product) {
    match self.items.iter_mut().find(|i| i.product.id == product.id) {
      Some(line) => {
        let next = line.quantity.saturating_add(1);
        line.set_quantity(next);
        debug!(product_id = %product.id, quantity = next, "Line item incremented.");
      }
      None => {
        self.items.push(LineItem::new(product));
        debug!(product_id = %product.id, unit_price = %product.price, "Line item added.");
      }
    }
  }

  /// `quantity <= 0` removes the line. Unknown products are ignored.
  pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
    if quantity <= 0 {
      self.remove_product(product_id);
      return;
    }
    let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
    if let Some(line) = self.items.iter_mut().find(|i| i.product.id == product_id) {
      line.set_quantity(quantity);
    }
  }

  pub fn remove_product(&mut self, product_id: &str) {
    self.items.retain(|i| i.product.id != product_id);
  }

  pub fn subtotal(&self) -> Decimal {
    self.items.iter().map(|i| i.total).sum()
  }

  /// Not clamped: a discount larger than the subtotal gives a negative total.
  pub fn total(&self) -> Decimal {
    self.subtotal() - self.discount
  }

  pub fn discount(&self) -> Decimal {
    self.discount
  }

  pub fn set_discount(&mut self, discount: Decimal) -> PosResult<()> {
    if discount.is_sign_negative() && !discount.is_zero() {
      return Err(PosError::Validation("discount cannot be negative".to_string()));
    }
    self.discount = discount;
    Ok(())
  }

  /// Sets the discount from free text. Text that is not a number counts as
  /// zero.
  pub fn set_discount_input(&mut self, raw: &str) -> PosResult<Decimal> {
    let parsed = parse_decimal(raw.trim()).unwrap_or(Decimal::ZERO);
    self.set_discount(parsed)?;
    Ok(parsed)
  }

  pub fn client_name(&self) -> &str {
    &self.client_name
  }

  pub fn set_client_name(&mut self, name: impl Into<String>) {
    self.client_name = name.into();
  }

  pub fn sale_date(&self) -> NaiveDate {
    self.sale_date
  }

  pub fn set_sale_date(&mut self, date: NaiveDate) {
    self.sale_date = date;
  }

  pub fn payment_method(&self) -> PaymentMethod {
    self.payment_method
  }

  pub fn set_payment_method(&mut self, method: PaymentMethod) {
    self.payment_method = method;
  }

  pub fn observations(&self) -> &str {
    &self.observations
  }

  pub fn set_observations(&mut self, text: impl Into<String>) {
    self.observations = text.into();
  }

  pub fn validate(&self) -> PosResult<()> {
    if self.items.is_empty() {
      return Err(PosError::Validation("add at least one product to the sale".to_string()));
    }
    if self.client_name.trim().is_empty() {
      return Err(PosError::Validation("client name is required".to_string()));
    }
    Ok(())
  }

  pub fn build_request(&self) -> PosResult<CreateSaleRequest> {
    self.validate()?;

    let items = self
      .items
      .iter()
      .map(|line| SaleItemRequest {
        product_id: line.product.id.clone(),
        quantity: line.quantity,
        unit_price: line.unit_price,
        subtotal: line.total,
      })
      .collect();

    let total = self.total();
    if total.is_sign_negative() && !total.is_zero() {
      warn!(subtotal = %self.subtotal(), discount = %self.discount, "Discount exceeds subtotal; total is negative.");
    }

    let observations = self.observations.trim();
    Ok(CreateSaleRequest {
      client_name: self.client_name.trim().to_string(),
      sale_date: self.sale_date,
      payment_method: self.payment_method,
      items,
      subtotal: self.subtotal(),
      discount: self.discount,
      total,
      observations: (!observations.is_empty()).then(|| observations.to_string()),
    })
  }

  /// Back to an empty sale with default client and payment method. The
  /// sale date is kept.
  pub fn clear(&mut self) {
    *self = Self::starting_on(self.sale_date);
  }
}
