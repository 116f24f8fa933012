// catalog_ingest/src/pipelines/mod.rs

//! Step-runner pipelines used by the service.

pub mod contexts;
pub mod product_pipeline;

pub use contexts::{IngestCtxData, IngestStage};
pub use product_pipeline::build_product_pipeline;
