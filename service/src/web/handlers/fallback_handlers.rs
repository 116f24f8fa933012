// catalog_ingest/src/web/handlers/fallback_handlers.rs

use actix_web::{HttpRequest, HttpResponse};

use crate::errors::AppError;

/// Any path other than `/`.
pub async fn not_found_handler(req: HttpRequest) -> Result<HttpResponse, AppError> {
  Err(AppError::NotFound(req.path().to_string()))
}

/// Any method other than POST on `/`. The body is never touched.
pub async fn method_not_allowed_handler(req: HttpRequest) -> Result<HttpResponse, AppError> {
  Err(AppError::MethodNotAllowed(req.method().to_string()))
}
