// pos_admin/src/dashboard.rs

use crate::models::{Product, Sale, SaleStatus};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Headline numbers for the dashboard screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
  pub product_count: usize,
  pub active_products: usize,
  pub out_of_stock: usize,
  pub sale_count: usize,
  /// Sum of totals over sales that are not cancelled.
  pub revenue: Decimal,
  pub sales_by_status: BTreeMap<String, usize>,
}

impl DashboardSummary {
  pub fn compute(products: &[Product], sales: &[Sale]) -> Self {
    let mut sales_by_status = BTreeMap::new();
    for sale in sales {
      *sales_by_status.entry(sale.status.as_str().to_string()).or_insert(0) += 1;
    }

    Self {
      product_count: products.len(),
      active_products: products.iter().filter(|p| p.is_active).count(),
      out_of_stock: products.iter().filter(|p| p.is_out_of_stock()).count(),
      sale_count: sales.len(),
      revenue: sales.iter().filter(|s| s.counts_as_revenue()).map(|s| s.total).sum(),
      sales_by_status,
    }
  }

  pub fn count_for(&self, status: &SaleStatus) -> usize {
    self.sales_by_status.get(status.as_str()).copied().unwrap_or(0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  fn product(stock: i64, active: bool) -> Product {
    Product {
      id: format!("p{}", stock),
      name: "x".into(),
      description: None,
      price: dec!(1),
      stock,
      sku: None,
      is_active: active,
      created_at: None,
      updated_at: None,
    }
  }

  fn sale(total: Decimal, status: SaleStatus) -> Sale {
    Sale {
      id: "s".into(),
      sale_number: "V".into(),
      user_id: None,
      total,
      status,
      sale_date: "2024-01-01".into(),
      created_at: None,
      updated_at: None,
    }
  }

  #[test]
  fn cancelled_sales_do_not_count_as_revenue() {
    let products = vec![product(0, true), product(4, false), product(9, true)];
    let sales = vec![
      sale(dec!(1000), SaleStatus::Completed),
      sale(dec!(500), SaleStatus::Pending),
      sale(dec!(700), SaleStatus::Cancelled),
    ];
    let summary = DashboardSummary::compute(&products, &sales);

    assert_eq!(summary.product_count, 3);
    assert_eq!(summary.active_products, 2);
    assert_eq!(summary.out_of_stock, 1);
    assert_eq!(summary.sale_count, 3);
    assert_eq!(summary.revenue, dec!(1500));
    assert_eq!(summary.count_for(&SaleStatus::Cancelled), 1);
    assert_eq!(summary.count_for(&SaleStatus::Other("refunded".into())), 0);
  }
}
