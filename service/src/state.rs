// catalog_ingest/src/state.rs
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::pipelines::{build_product_pipeline, IngestCtxData};
use crate::store::{ProductStore, UserDirectory};
use ingest_flow::Pipeline;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub users: Arc<dyn UserDirectory>,
  pub products: Arc<dyn ProductStore>,
  pub ingest_pipeline: Arc<Pipeline<IngestCtxData, AppError>>,
  pub config: Arc<AppConfig>,
}

impl AppState {
  pub fn new(users: Arc<dyn UserDirectory>, products: Arc<dyn ProductStore>, config: Arc<AppConfig>) -> Self {
    Self {
      users,
      products,
      ingest_pipeline: Arc::new(build_product_pipeline()),
      config,
    }
  }
}
