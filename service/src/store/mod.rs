// catalog_ingest/src/store/mod.rs

//! Backing-store collaborators consumed by the ingestion pipeline.
//!
//! The pipeline only depends on these traits; `main` injects the PostgreSQL
//! adapter and tests inject an in-memory one.

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::Product;

pub mod postgres;

pub use postgres::PgCatalogStore;

/// Membership check against the user domain, which this service does not own.
#[async_trait]
pub trait UserDirectory: Send + Sync {
  async fn user_exists(&self, user_id: i64) -> Result<bool>;
}

/// Durable product creation.
#[async_trait]
pub trait ProductStore: Send + Sync {
  async fn create_product(&self, product: &Product) -> Result<()>;
}
