// pos_admin_console/src/render.rs

//! Plain-text rendering for the console screens.

use pos_admin::guard::Route;
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::{self, Write};

/// Colombian peso formatting: `$ 12.500` or `$ 9.800,50`.
pub fn format_cop(amount: Decimal) -> String {
  let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
  let negative = rounded.is_sign_negative() && !rounded.is_zero();
  let abs = rounded.abs();
  let whole = abs.trunc();
  let cents = ((abs - whole) * Decimal::from(100)).trunc();

  let digits = whole.to_string();
  let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      grouped.push('.');
    }
    grouped.push(ch);
  }

  let sign = if negative { "-" } else { "" };
  if cents.is_zero() {
    format!("{}$ {}", sign, grouped)
  } else {
    format!("{}$ {},{:0>2}", sign, grouped, cents.to_string())
  }
}

pub fn active_label(flag: bool) -> &'static str {
  if flag {
    "Active"
  } else {
    "Inactive"
  }
}

/// Tells the user which screen comes next.
pub fn navigate(out: &mut dyn Write, route: &Route) -> io::Result<()> {
  writeln!(out, "→ {}", route)
}

/// Left-aligned columns sized to their widest cell.
pub struct Table {
  headers: Vec<String>,
  rows: Vec<Vec<String>>,
}

impl Table {
  pub fn new(headers: &[&str]) -> Self {
    Self {
      headers: headers.iter().map(|h| h.to_string()).collect(),
      rows: Vec::new(),
    }
  }

  pub fn row(&mut self, cells: Vec<String>) {
    self.rows.push(cells);
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
    let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
    for row in &self.rows {
      for (i, cell) in row.iter().enumerate() {
        if let Some(width) = widths.get_mut(i) {
          *width = (*width).max(cell.chars().count());
        }
      }
    }

    let render = |cells: &[String]| -> String {
      cells
        .iter()
        .zip(&widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
    };

    writeln!(out, "{}", render(&self.headers))?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("  "))?;
    for row in &self.rows {
      writeln!(out, "{}", render(row))?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn cop_amounts() {
    assert_eq!(format_cop(dec!(0)), "$ 0");
    assert_eq!(format_cop(dec!(950)), "$ 950");
    assert_eq!(format_cop(dec!(12500)), "$ 12.500");
    assert_eq!(format_cop(dec!(1234567)), "$ 1.234.567");
    assert_eq!(format_cop(dec!(9800.5)), "$ 9.800,50");
    assert_eq!(format_cop(dec!(-500)), "-$ 500");
  }

  #[test]
  fn table_pads_columns() {
    let mut table = Table::new(&["ID", "Nombre"]);
    table.row(vec!["1".into(), "Arroz".into()]);
    table.row(vec!["10".into(), "Sal".into()]);
    let mut out = Vec::new();
    table.write_to(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "ID  Nombre\n--  ------\n1   Arroz\n10  Sal\n");
  }
}
