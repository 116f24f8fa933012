// ingest_flow/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Handler missing for step: {step_name}")]
    HandlerMissing { step_name: String },
}
