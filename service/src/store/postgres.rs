// catalog_ingest/src/store/postgres.rs

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::errors::{AppError, Result};
use crate::models::Product;
use crate::store::{ProductStore, UserDirectory};

/// PostgreSQL adapter over a shared connection pool.
///
/// Expects `users(id BIGINT)` and
/// `products(user_id BIGINT, product_name TEXT, product_description TEXT,
/// product_images TEXT[], product_price DOUBLE PRECISION)`.
#[derive(Clone)]
pub struct PgCatalogStore {
  pool: PgPool,
}

impl PgCatalogStore {
  /// Opens the pool. Succeeds only once a first connection is established.
  pub async fn connect(database_url: &str, max_connections: u32) -> std::result::Result<Self, sqlx::Error> {
    let pool = PgPoolOptions::new()
      .max_connections(max_connections)
      .acquire_timeout(Duration::from_secs(5))
      .connect(database_url)
      .await?;
    Ok(Self { pool })
  }

  /// Waits for in-flight queries, then closes every connection.
  pub async fn close(&self) {
    self.pool.close().await;
    info!("Database pool closed.");
  }
}

#[async_trait]
impl UserDirectory for PgCatalogStore {
  #[instrument(name = "store::user_exists", skip(self))]
  async fn user_exists(&self, user_id: i64) -> Result<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
      .bind(user_id)
      .fetch_one(&self.pool)
      .await
      .map_err(|e| {
        error!("Database error while looking up user {}: {}", user_id, e);
        AppError::Sqlx(e)
      })
  }
}

#[async_trait]
impl ProductStore for PgCatalogStore {
  #[instrument(name = "store::create_product", skip(self, product), fields(user_id = product.user_id))]
  async fn create_product(&self, product: &Product) -> Result<()> {
    sqlx::query(
      "INSERT INTO products (user_id, product_name, product_description, product_images, product_price) \
       VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(product.user_id)
    .bind(&product.product_name)
    .bind(&product.product_description)
    .bind(&product.product_images)
    .bind(product.product_price)
    .execute(&self.pool)
    .await
    .map_err(AppError::Sqlx)?;
    Ok(())
  }
}
