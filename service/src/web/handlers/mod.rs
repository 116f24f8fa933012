// catalog_ingest/src/web/handlers/mod.rs

pub mod fallback_handlers;
pub mod product_handlers;
