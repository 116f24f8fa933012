// tests/common/mod.rs
#![allow(dead_code)]

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App};
use async_trait::async_trait;
use catalog_ingest::bootstrap::RetryPolicy;
use catalog_ingest::config::AppConfig;
use catalog_ingest::errors::{AppError, Result as AppResult};
use catalog_ingest::models::Product;
use catalog_ingest::state::AppState;
use catalog_ingest::store::{ProductStore, UserDirectory};
use catalog_ingest::web::configure_app_routes;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the PostgreSQL adapter.
#[derive(Default)]
pub struct MemoryCatalog {
  known_users: HashSet<i64>,
  fail_writes: bool,
  fail_lookups: bool,
  pub created: Mutex<Vec<Product>>,
  pub create_calls: AtomicUsize,
  pub lookup_calls: AtomicUsize,
}

impl MemoryCatalog {
  pub fn with_users(ids: &[i64]) -> Self {
    Self {
      known_users: ids.iter().copied().collect(),
      ..Default::default()
    }
  }

  pub fn failing_writes(mut self) -> Self {
    self.fail_writes = true;
    self
  }

  pub fn failing_lookups(mut self) -> Self {
    self.fail_lookups = true;
    self
  }

  pub fn create_calls(&self) -> usize {
    self.create_calls.load(Ordering::SeqCst)
  }

  pub fn lookup_calls(&self) -> usize {
    self.lookup_calls.load(Ordering::SeqCst)
  }

  pub fn created(&self) -> Vec<Product> {
    self.created.lock().unwrap().clone()
  }
}

#[async_trait]
impl UserDirectory for MemoryCatalog {
  async fn user_exists(&self, user_id: i64) -> AppResult<bool> {
    self.lookup_calls.fetch_add(1, Ordering::SeqCst);
    if self.fail_lookups {
      return Err(AppError::Sqlx(sqlx::Error::PoolTimedOut));
    }
    Ok(self.known_users.contains(&user_id))
  }
}

#[async_trait]
impl ProductStore for MemoryCatalog {
  async fn create_product(&self, product: &Product) -> AppResult<()> {
    self.create_calls.fetch_add(1, Ordering::SeqCst);
    if self.fail_writes {
      return Err(AppError::Sqlx(sqlx::Error::PoolClosed));
    }
    self.created.lock().unwrap().push(product.clone());
    Ok(())
  }
}

pub fn test_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    database_url: "postgres://unused".to_string(),
    db_max_connections: 1,
    store_retry: RetryPolicy::default(),
    max_body_bytes: 1024,
  }
}

pub fn test_state(catalog: Arc<MemoryCatalog>) -> AppState {
  AppState::new(catalog.clone(), catalog, Arc::new(test_config()))
}

/// Full route table over `catalog`, as `main` wires it minus the middleware.
pub async fn init_ingest_app(
  catalog: Arc<MemoryCatalog>,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
  test::init_service(
    App::new()
      .app_data(web::Data::new(test_state(catalog)))
      .configure(configure_app_routes),
  )
  .await
}

pub const MUG_PAYLOAD: &str = r#"{"user_id":1,"product_name":"Mug","product_description":"","product_images":[],"product_price":9.99}"#;

pub fn mug() -> Product {
  Product {
    user_id: 1,
    product_name: "Mug".to_string(),
    product_description: String::new(),
    product_images: vec![],
    product_price: 9.99,
  }
}
