// catalog_ingest/src/models/product.rs

use serde::{Deserialize, Serialize};

/// A catalog entry submitted for creation.
///
/// Decoding is strict about types: a present field with the wrong JSON type is
/// a decode error. Absent `user_id`/`product_name` default to values that the
/// validation rules reject, so the client learns which rule failed. Absent
/// description and images default to empty. `product_price` has no default; a
/// payload without it does not decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  #[serde(default)]
  pub user_id: i64,
  #[serde(default)]
  pub product_name: String,
  #[serde(default)]
  pub product_description: String,
  #[serde(default)]
  pub product_images: Vec<String>,
  pub product_price: f64,
}

impl Product {
  pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
    serde_json::from_slice(bytes)
  }
}

#[cfg(test)]
mod tests {
  use super::Product;

  #[test]
  fn decodes_full_payload() {
    let p = Product::from_json(
      br#"{"user_id":1,"product_name":"Mug","product_description":"","product_images":["https://img/1.png"],"product_price":9.99}"#,
    )
    .unwrap();
    assert_eq!(p.user_id, 1);
    assert_eq!(p.product_name, "Mug");
    assert_eq!(p.product_images, vec!["https://img/1.png".to_string()]);
    assert_eq!(p.product_price, 9.99);
  }

  #[test]
  fn missing_optional_fields_default() {
    let p = Product::from_json(br#"{"product_price": 3}"#).unwrap();
    assert_eq!(p.user_id, 0);
    assert!(p.product_name.is_empty());
    assert!(p.product_description.is_empty());
    assert!(p.product_images.is_empty());
    assert_eq!(p.product_price, 3.0);
  }

  #[test]
  fn type_mismatches_and_missing_price_fail_to_decode() {
    assert!(Product::from_json(br#"{"user_id":"one","product_price":1}"#).is_err());
    assert!(Product::from_json(br#"{"user_id":1.5,"product_price":1}"#).is_err());
    assert!(Product::from_json(br#"{"product_images":"https://x","product_price":1}"#).is_err());
    assert!(Product::from_json(br#"{"product_name":null,"product_price":1}"#).is_err());
    assert!(Product::from_json(br#"{"user_id":1,"product_name":"Mug"}"#).is_err());
    assert!(Product::from_json(b"not-json").is_err());
  }

  #[test]
  fn unknown_fields_are_ignored() {
    let p = Product::from_json(br#"{"product_price":1,"sku":"A-1"}"#).unwrap();
    assert_eq!(p.product_price, 1.0);
  }
}
