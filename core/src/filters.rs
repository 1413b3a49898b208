// pos_admin/src/filters.rs

//! Case-insensitive substring filters used by the list screens.

use crate::models::{Product, Sale, SaleStatus, User};

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
  haystack.to_lowercase().contains(needle_lower)
}

fn needle(term: &str) -> Option<String> {
  let trimmed = term.trim();
  (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Matches name, id, SKU or description.
pub fn filter_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
  let needle = match needle(term) {
    Some(n) => n,
    None => return products.iter().collect(),
  };
  products
    .iter()
    .filter(|p| {
      contains_folded(&p.name, &needle)
        || contains_folded(&p.id, &needle)
        || p.sku.as_deref().is_some_and(|s| contains_folded(s, &needle))
        || p.description.as_deref().is_some_and(|d| contains_folded(d, &needle))
    })
    .collect()
}

/// The new-sale catalog: active products only, then the text filter.
pub fn sale_catalog<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
  filter_products(products, term)
    .into_iter()
    .filter(|p| p.is_active)
    .collect()
}

/// Matches sale number or id, optionally restricted to one status.
pub fn filter_sales<'a>(sales: &'a [Sale], term: &str, status: Option<&SaleStatus>) -> Vec<&'a Sale> {
  let needle = needle(term);
  sales
    .iter()
    .filter(|s| status.map_or(true, |wanted| &s.status == wanted))
    .filter(|s| match &needle {
      Some(n) => contains_folded(&s.sale_number, n) || contains_folded(&s.id, n),
      None => true,
    })
    .collect()
}

/// Matches name, email or role.
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
  let needle = match needle(term) {
    Some(n) => n,
    None => return users.iter().collect(),
  };
  users
    .iter()
    .filter(|u| {
      contains_folded(&u.name, &needle) || contains_folded(&u.email, &needle) || contains_folded(u.role.as_str(), &needle)
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::Role;
  use rust_decimal_macros::dec;

  fn product(id: &str, name: &str, sku: Option<&str>, active: bool) -> Product {
    Product {
      id: id.to_string(),
      name: name.to_string(),
      description: Some("Bebida fría".to_string()),
      price: dec!(1000),
      stock: 5,
      sku: sku.map(str::to_string),
      is_active: active,
      created_at: None,
      updated_at: None,
    }
  }

  fn sale(id: &str, number: &str, status: SaleStatus) -> Sale {
    Sale {
      id: id.to_string(),
      sale_number: number.to_string(),
      user_id: None,
      total: dec!(100),
      status,
      sale_date: "2024-03-15T10:00:00.000Z".to_string(),
      created_at: None,
      updated_at: None,
    }
  }

  #[test]
  fn products_match_any_field_case_insensitively() {
    let products = vec![
      product("1", "Coca Cola", Some("BEB-001"), true),
      product("2", "Pan Tajado", None, false),
    ];
    assert_eq!(filter_products(&products, "coca").len(), 1);
    assert_eq!(filter_products(&products, "beb-0").len(), 1);
    assert_eq!(filter_products(&products, "FRÍA").len(), 2);
    assert_eq!(filter_products(&products, "  ").len(), 2);
    assert_eq!(sale_catalog(&products, "").len(), 1);
  }

  #[test]
  fn sales_filter_by_number_and_status() {
    let sales = vec![
      sale("10", "V-0001", SaleStatus::Completed),
      sale("11", "V-0002", SaleStatus::Pending),
      sale("12", "V-0003", SaleStatus::Cancelled),
    ];
    assert_eq!(filter_sales(&sales, "v-000", None).len(), 3);
    assert_eq!(filter_sales(&sales, "", Some(&SaleStatus::Pending)).len(), 1);
    assert_eq!(filter_sales(&sales, "12", None)[0].sale_number, "V-0003");
    assert!(filter_sales(&sales, "0001", Some(&SaleStatus::Cancelled)).is_empty());
  }

  #[test]
  fn users_filter_by_role_text() {
    let users = vec![
      User {
        id: "1".into(),
        email: "ana@tienda.co".into(),
        name: "Ana".into(),
        role: Role::Admin,
        is_active: true,
        created_at: None,
        updated_at: None,
      },
      User {
        id: "2".into(),
        email: "luis@tienda.co".into(),
        name: "Luis".into(),
        role: Role::User,
        is_active: true,
        created_at: None,
        updated_at: None,
      },
    ];
    assert_eq!(filter_users(&users, "admin").len(), 1);
    assert_eq!(filter_users(&users, "TIENDA").len(), 2);
  }
}
