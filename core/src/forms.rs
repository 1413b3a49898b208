// pos_admin/src/forms.rs

//! Client-side form validation. Errors are collected per field and block
//! the request before anything is sent.

use crate::error::{PosError, PosResult};
use crate::models::{
  CreateProductRequest, CreateUserRequest, LoginCredentials, Product, Role, UpdateProductRequest,
  UpdateUserRequest, User,
};
use crate::wire::coerce::parse_decimal;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Field name → message, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
  pub fn new() -> Self {
    Self::default()
  }

  /// Records `message` for `field` unless the field already has one.
  pub fn add(&mut self, field: &str, message: impl Into<String>) {
    self.0.entry(field.to_string()).or_insert_with(|| message.into());
  }

  pub fn get(&self, field: &str) -> Option<&str> {
    self.0.get(field).map(String::as_str)
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  pub fn into_result(self) -> Result<(), FieldErrors> {
    if self.is_empty() {
      Ok(())
    } else {
      Err(self)
    }
  }
}

impl fmt::Display for FieldErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for (field, message) in &self.0 {
      if !first {
        f.write_str("; ")?;
      }
      write!(f, "{}: {}", field, message)?;
      first = false;
    }
    Ok(())
  }
}

impl From<FieldErrors> for PosError {
  fn from(errors: FieldErrors) -> Self {
    PosError::InvalidForm(errors)
  }
}

/// `local@domain.tld`: no whitespace, a single `@`, and a dot inside the
/// domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
  if email.chars().any(char::is_whitespace) {
    return false;
  }
  let (local, domain) = match email.split_once('@') {
    Some(parts) => parts,
    None => return false,
  };
  if local.is_empty() || domain.contains('@') {
    return false;
  }
  domain
    .char_indices()
    .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn blank_to_none(value: &str) -> Option<String> {
  let trimmed = value.trim();
  (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn validate_login(email: &str, password: &str) -> PosResult<LoginCredentials> {
  let mut errors = FieldErrors::new();
  if email.trim().is_empty() {
    errors.add("email", "email is required");
  }
  if password.is_empty() {
    errors.add("password", "password is required");
  }
  errors.into_result()?;
  Ok(LoginCredentials {
    email: email.trim().to_string(),
    password: password.to_string(),
  })
}

/// Product add/edit form, holding raw text as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
  pub name: String,
  pub description: String,
  pub price: String,
  pub stock: String,
  pub sku: String,
  pub is_active: bool,
}

impl Default for ProductForm {
  fn default() -> Self {
    Self {
      name: String::new(),
      description: String::new(),
      price: String::new(),
      stock: String::new(),
      sku: String::new(),
      is_active: true,
    }
  }
}

struct ProductFields {
  name: String,
  description: Option<String>,
  price: Decimal,
  stock: i64,
  sku: Option<String>,
}

impl ProductForm {
  /// Pre-fills the form for editing.
  pub fn from_product(product: &Product) -> Self {
    Self {
      name: product.name.clone(),
      description: product.description.clone().unwrap_or_default(),
      price: product.price.normalize().to_string(),
      stock: product.stock.to_string(),
      sku: product.sku.clone().unwrap_or_default(),
      is_active: product.is_active,
    }
  }

  pub fn validate(&self) -> Result<(), FieldErrors> {
    self.parse().map(|_| ())
  }

  fn parse(&self) -> Result<ProductFields, FieldErrors> {
    let mut errors = FieldErrors::new();

    if self.name.trim().is_empty() {
      errors.add("name", "name is required");
    }

    let price = if self.price.trim().is_empty() {
      errors.add("price", "price is required");
      Decimal::ZERO
    } else {
      match parse_decimal(self.price.trim()) {
        Some(p) if p > Decimal::ZERO => p,
        Some(_) => {
          errors.add("price", "price must be greater than 0");
          Decimal::ZERO
        }
        None => {
          errors.add("price", "price must be a number");
          Decimal::ZERO
        }
      }
    };

    let stock = if self.stock.trim().is_empty() {
      0
    } else {
      match self.stock.trim().parse::<i64>() {
        Ok(s) if s >= 0 => s,
        Ok(_) => {
          errors.add("stock", "stock cannot be negative");
          0
        }
        Err(_) => {
          errors.add("stock", "stock must be a whole number");
          0
        }
      }
    };

    errors.into_result()?;
    Ok(ProductFields {
      name: self.name.trim().to_string(),
      description: blank_to_none(&self.description),
      price,
      stock,
      sku: blank_to_none(&self.sku),
    })
  }

  pub fn to_create_request(&self) -> PosResult<CreateProductRequest> {
    let fields = self.parse()?;
    Ok(CreateProductRequest {
      name: fields.name,
      description: fields.description,
      price: fields.price,
      stock: fields.stock,
      sku: fields.sku,
      is_active: self.is_active,
    })
  }

  /// Every field, as the edit screen submits the whole form.
  pub fn to_update_request(&self) -> PosResult<UpdateProductRequest> {
    let fields = self.parse()?;
    Ok(UpdateProductRequest {
      name: Some(fields.name),
      description: Some(fields.description),
      price: Some(fields.price),
      stock: Some(fields.stock),
      sku: Some(fields.sku),
      is_active: Some(self.is_active),
    })
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
  Create,
  Edit,
}

#[derive(Clone, PartialEq)]
pub struct UserForm {
  pub name: String,
  pub email: String,
  pub password: String,
  pub confirm_password: String,
  pub role: Role,
  pub is_active: bool,
}

impl Default for UserForm {
  fn default() -> Self {
    Self {
      name: String::new(),
      email: String::new(),
      password: String::new(),
      confirm_password: String::new(),
      role: Role::User,
      is_active: true,
    }
  }
}

impl fmt::Debug for UserForm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("UserForm")
      .field("name", &self.name)
      .field("email", &self.email)
      .field("password", &"[REDACTED]")
      .field("role", &self.role)
      .field("is_active", &self.is_active)
      .finish()
  }
}

impl UserForm {
  pub fn from_user(user: &User) -> Self {
    Self {
      name: user.name.clone(),
      email: user.email.clone(),
      password: String::new(),
      confirm_password: String::new(),
      role: user.role,
      is_active: user.is_active,
    }
  }

  /// In edit mode a blank password means "keep the current one".
  pub fn validate(&self, mode: FormMode) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if self.name.trim().is_empty() {
      errors.add("name", "name is required");
    }

    let email = self.email.trim();
    if email.is_empty() {
      errors.add("email", "email is required");
    } else if !is_valid_email(email) {
      errors.add("email", "email is not valid");
    }

    let changing_password = mode == FormMode::Create || !self.password.is_empty();
    if changing_password {
      if self.password.is_empty() {
        errors.add("password", "password is required");
      } else if self.password.chars().count() < MIN_PASSWORD_LEN {
        errors.add(
          "password",
          format!("password must be at least {} characters", MIN_PASSWORD_LEN),
        );
      }
      if self.confirm_password.is_empty() {
        errors.add("confirm_password", "confirm the password");
      } else if self.confirm_password != self.password {
        errors.add("confirm_password", "passwords do not match");
      }
    }

    errors.into_result()
  }

  pub fn to_create_request(&self) -> PosResult<CreateUserRequest> {
    self.validate(FormMode::Create)?;
    Ok(CreateUserRequest {
      email: self.email.trim().to_string(),
      password: self.password.clone(),
      name: self.name.trim().to_string(),
      role: self.role,
      is_active: self.is_active,
    })
  }

  pub fn to_update_request(&self) -> PosResult<UpdateUserRequest> {
    self.validate(FormMode::Edit)?;
    Ok(UpdateUserRequest {
      email: Some(self.email.trim().to_string()),
      password: (!self.password.is_empty()).then(|| self.password.clone()),
      name: Some(self.name.trim().to_string()),
      role: Some(self.role),
      is_active: Some(self.is_active),
    })
  }
}
