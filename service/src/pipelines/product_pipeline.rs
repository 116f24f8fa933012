// catalog_ingest/src/pipelines/product_pipeline.rs

use ingest_flow::{ContextData, Pipeline, PipelineControl};
use tracing::{event, info, instrument, warn, Level};

use crate::errors::{AppError, Result as AppResult};
use crate::models::Product;
use crate::pipelines::contexts::{IngestCtxData, IngestStage};
use crate::validation;

pub const DECODE_STEP: &str = "decode_payload";
pub const VALIDATE_STEP: &str = "validate_product";
pub const PERSIST_STEP: &str = "persist_product";

/// Builds the decode → validate → persist pipeline. Built once at startup
/// and shared by every request.
pub fn build_product_pipeline() -> Pipeline<IngestCtxData, AppError> {
  let mut pipeline = Pipeline::<IngestCtxData, AppError>::new(&[DECODE_STEP, VALIDATE_STEP, PERSIST_STEP]);

  pipeline.on_root(DECODE_STEP, decode_payload_step);
  pipeline.on_root(VALIDATE_STEP, validate_product_step);
  pipeline.on_root(PERSIST_STEP, persist_product_step);

  tracing::info!("Product ingestion pipeline built.");
  pipeline
}

#[instrument(name = "step::decode_payload", skip(ctx_data))]
async fn decode_payload_step(ctx_data: ContextData<IngestCtxData>) -> AppResult<PipelineControl> {
  let raw_body = { ctx_data.read().raw_body.clone() };
  event!(Level::DEBUG, body_len = raw_body.len(), "Decoding product payload.");

  let product = Product::from_json(&raw_body).map_err(|e| {
    warn!(error = %e, "Request body is not a valid product payload.");
    AppError::InvalidJson(e.to_string())
  })?;

  let mut guard = ctx_data.write();
  guard.product = Some(product);
  guard.stage = IngestStage::Decoded;
  Ok(PipelineControl::Continue)
}

#[instrument(name = "step::validate_product", skip(ctx_data))]
async fn validate_product_step(ctx_data: ContextData<IngestCtxData>) -> AppResult<PipelineControl> {
  let (product, users) = {
    let guard = ctx_data.read();
    (decoded_product(&guard)?, guard.users.clone())
  }; // guard dropped

  validation::validate_product(&product, users.as_ref()).await?;

  ctx_data.write().stage = IngestStage::Validated;
  Ok(PipelineControl::Continue)
}

#[instrument(name = "step::persist_product", skip(ctx_data))]
async fn persist_product_step(ctx_data: ContextData<IngestCtxData>) -> AppResult<PipelineControl> {
  let (product, products) = {
    let guard = ctx_data.read();
    (decoded_product(&guard)?, guard.products.clone())
  }; // guard dropped

  match products.create_product(&product).await {
    Ok(()) => {
      ctx_data.write().stage = IngestStage::Persisted;
      info!(user_id = product.user_id, product_name = %product.product_name, "Product persisted.");
      Ok(PipelineControl::Continue)
    }
    Err(store_err) => {
      event!(Level::ERROR, error = %store_err, "Store rejected the product write.");
      Err(AppError::Persistence(store_err.to_string()))
    }
  }
}

fn decoded_product(ctx: &IngestCtxData) -> AppResult<Product> {
  ctx
    .product
    .clone()
    .ok_or_else(|| AppError::Internal("Product missing from ingestion context.".to_string()))
}
