// catalog_ingest/src/errors.rs

use actix_web::http::header;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::validation::ValidationReport;
use ingest_flow::FlowError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Method Not Allowed: {0}")]
  MethodNotAllowed(String),

  #[error("Unable to read request body: {0}")]
  BodyRead(String),

  #[error("Request body exceeds {limit} bytes")]
  PayloadTooLarge { limit: usize },

  #[error("Invalid JSON: {0}")]
  InvalidJson(String),

  #[error("Invalid product: {0}")]
  Validation(ValidationReport),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Unable to add the product: {0}")]
  Persistence(String),

  #[error("Ingestion Workflow Error: {source}")]
  Workflow {
    #[from]
    source: FlowError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl AppError {
  /// True for rejections caused by the request itself.
  pub fn is_client_error(&self) -> bool {
    matches!(
      self,
      AppError::NotFound(_)
        | AppError::MethodNotAllowed(_)
        | AppError::PayloadTooLarge { .. }
        | AppError::InvalidJson(_)
        | AppError::Validation(_)
    )
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    if self.is_client_error() {
      tracing::warn!(application_error = %self, "Rejecting request");
    } else {
      tracing::error!(application_error = %self, "Responding with error");
    }
    match self {
      AppError::NotFound(path) => HttpResponse::NotFound().json(json!({"error": "404 not found.", "path": path})),
      AppError::MethodNotAllowed(method) => HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "POST"))
        .json(json!({"error": "Invalid request method", "method": method})),
      AppError::BodyRead(_) => HttpResponse::InternalServerError().json(json!({"error": "Unable to parse body"})),
      AppError::PayloadTooLarge { limit } => {
        HttpResponse::PayloadTooLarge().json(json!({"error": "Request body too large", "limit_bytes": limit}))
      }
      AppError::InvalidJson(detail) => {
        HttpResponse::BadRequest().json(json!({"error": "Invalid JSON", "detail": detail}))
      }
      AppError::Validation(report) => HttpResponse::BadRequest().json(json!({
        "error": "Invalid product",
        "violations": report.messages(),
      })),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Sqlx(_) => HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"})),
      // Storage detail stays in the logs.
      AppError::Persistence(_) => {
        HttpResponse::InternalServerError().json(json!({"error": "Unable to add the product"}))
      }
      AppError::Workflow { source } => {
        tracing::error!(flow_error_source = ?source, "Workflow error details");
        HttpResponse::InternalServerError().json(json!({"error": "Workflow processing error"}))
      }
      AppError::Internal(_) => HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred"})),
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
