// catalog_ingest/src/validation.rs

//! Business rules a product must satisfy before it is persisted.
//!
//! Every rule is evaluated and every failure is reported, in rule order:
//! user, name, images, price.

use std::fmt;
use tracing::{debug, instrument};
use url::Url;

use crate::errors::{AppError, Result};
use crate::models::Product;
use crate::store::UserDirectory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
  /// `user_id` is zero or names no known user.
  UnknownUser { user_id: i64 },
  EmptyName,
  InvalidImageUrl { index: usize, value: String },
  NegativePrice,
}

impl fmt::Display for Violation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Violation::UnknownUser { user_id } => write!(f, "user {} does not exist", user_id),
      Violation::EmptyName => f.write_str("product name cannot be empty"),
      Violation::InvalidImageUrl { index, value } => {
        write!(f, "product images must be valid URLs (entry {}: '{}')", index, value)
      }
      Violation::NegativePrice => f.write_str("product price cannot be negative"),
    }
  }
}

/// Non-empty list of violations for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport(Vec<Violation>);

impl ValidationReport {
  pub fn violations(&self) -> &[Violation] {
    &self.0
  }

  pub fn messages(&self) -> Vec<String> {
    self.0.iter().map(ToString::to_string).collect()
  }
}

impl fmt::Display for ValidationReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.messages().join("; "))
  }
}

/// Runs every rule against `product`.
///
/// Returns `AppError::Validation` when any rule fails. A failing user lookup
/// is returned as-is since no verdict could be reached.
#[instrument(name = "validation::validate_product", skip_all, fields(user_id = product.user_id))]
pub async fn validate_product(product: &Product, users: &dyn UserDirectory) -> Result<()> {
  let mut violations = Vec::new();

  // Zero is never a valid id; skip the lookup for it.
  if product.user_id == 0 || !users.user_exists(product.user_id).await? {
    violations.push(Violation::UnknownUser {
      user_id: product.user_id,
    });
  }
  violations.extend(check_fields(product));

  if violations.is_empty() {
    debug!("Product passed validation.");
    Ok(())
  } else {
    debug!(count = violations.len(), "Product failed validation.");
    Err(AppError::Validation(ValidationReport(violations)))
  }
}

/// The rules that need nothing but the product itself.
pub fn check_fields(product: &Product) -> Vec<Violation> {
  let mut violations = Vec::new();
  if product.product_name.is_empty() {
    violations.push(Violation::EmptyName);
  }
  if let Some((index, value)) = product
    .product_images
    .iter()
    .enumerate()
    .find(|(_, raw)| !is_absolute_url(raw))
  {
    violations.push(Violation::InvalidImageUrl {
      index,
      value: value.clone(),
    });
  }
  if product.product_price < 0.0 {
    violations.push(Violation::NegativePrice);
  }
  violations
}

/// `Url::parse` only accepts input carrying a scheme, i.e. absolute URLs.
fn is_absolute_url(raw: &str) -> bool {
  Url::parse(raw).is_ok()
}
