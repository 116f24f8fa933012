// ingest_flow/src/core/step.rs

//! Step definitions and the boxed handler type stored per step.

use crate::core::context_data::ContextData;
use crate::core::control::PipelineControl;
use std::future::Future;
use std::pin::Pin;

/// A type-erased step handler.
///
/// Takes a clone of the run's `ContextData<TData>` and resolves to the control
/// signal, or to the pipeline's error type `Err`.
pub type Handler<TData, Err> = Box<
  dyn Fn(ContextData<TData>) -> Pin<Box<dyn Future<Output = Result<PipelineControl, Err>> + Send>>
    + Send
    + Sync,
>;

/// A named position in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDef {
  pub name: String,
}
