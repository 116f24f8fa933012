// catalog_ingest/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{fallback_handlers, product_handlers};

/// A single resource is served: `POST /` creates a product.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .service(
      web::resource("/")
        .route(web::post().to(product_handlers::add_product_handler))
        .default_service(web::to(fallback_handlers::method_not_allowed_handler)),
    )
    .default_service(web::to(fallback_handlers::not_found_handler));
}
