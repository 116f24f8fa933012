// catalog_ingest/src/web/handlers/product_handlers.rs

use actix_web::web::{self, BytesMut};
use actix_web::HttpResponse;
use futures_util::StreamExt;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::pipelines::contexts::{IngestCtxData, IngestStage};
use crate::state::AppState;
use ingest_flow::{ContextData, PipelineResult};

pub const SUCCESS_BODY: &str = "Product added successfully";

#[instrument(name = "handler::add_product", skip(app_state, payload))]
pub async fn add_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Payload,
) -> Result<HttpResponse, AppError> {
  let mut ctx_data = IngestCtxData::received(app_state.users.clone(), app_state.products.clone());
  // Only `POST /` is routed here.
  ctx_data.mark_routed();
  ctx_data.raw_body = read_body(payload, app_state.config.max_body_bytes).await?.freeze();

  let ctx = ContextData::new(ctx_data);

  let outcome = app_state.ingest_pipeline.run(ctx.clone()).await;
  let stage = ctx.read().stage;

  match outcome {
    Ok(PipelineResult::Completed) if stage == IngestStage::Persisted => {
      info!(%stage, "Product ingestion completed.");
      Ok(
        HttpResponse::Ok()
          .content_type("text/plain; charset=utf-8")
          .body(SUCCESS_BODY),
      )
    }
    Ok(result) => {
      warn!(?result, %stage, "Ingestion pipeline ended without persisting the product.");
      Err(AppError::Internal(format!(
        "Ingestion ended at stage '{}' without persisting the product.",
        stage
      )))
    }
    Err(app_err) => {
      warn!(%stage, error = %app_err, "Product ingestion rejected.");
      Err(app_err)
    }
  }
}

/// Drains the payload stream, refusing bodies above `limit` bytes.
async fn read_body(mut payload: web::Payload, limit: usize) -> Result<BytesMut, AppError> {
  let mut body = BytesMut::new();
  while let Some(chunk) = payload.next().await {
    let chunk = chunk.map_err(|e| AppError::BodyRead(e.to_string()))?;
    if body.len() + chunk.len() > limit {
      return Err(AppError::PayloadTooLarge { limit });
    }
    body.extend_from_slice(&chunk);
  }
  Ok(body)
}
