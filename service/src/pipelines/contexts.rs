// catalog_ingest/src/pipelines/contexts.rs

//! Per-request data handed to pipeline steps wrapped in `ingest_flow::ContextData`.

use actix_web::web::Bytes;
use std::fmt;
use std::sync::Arc;

use crate::models::Product;
use crate::store::{ProductStore, UserDirectory};

/// Furthest point a request reached. Rejections leave it at the stage
/// before the one that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestStage {
  Received,
  Routed,
  Decoded,
  Validated,
  Persisted,
}

impl fmt::Display for IngestStage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      IngestStage::Received => "received",
      IngestStage::Routed => "routed",
      IngestStage::Decoded => "decoded",
      IngestStage::Validated => "validated",
      IngestStage::Persisted => "persisted",
    };
    f.write_str(name)
  }
}

#[derive(Clone)]
pub struct IngestCtxData {
  pub users: Arc<dyn UserDirectory>,
  pub products: Arc<dyn ProductStore>,
  pub raw_body: Bytes,
  pub product: Option<Product>,
  pub stage: IngestStage,
}

impl IngestCtxData {
  /// Context for a request that has just arrived; the body is not read yet.
  pub fn received(users: Arc<dyn UserDirectory>, products: Arc<dyn ProductStore>) -> Self {
    Self {
      users,
      products,
      raw_body: Bytes::new(),
      product: None,
      stage: IngestStage::Received,
    }
  }

  /// Records that the request passed the method and path guard.
  pub fn mark_routed(&mut self) {
    self.stage = IngestStage::Routed;
  }
}
