// ingest_flow/src/lib.rs

//! ingest_flow: a small ASYNC named-step pipeline runner.
//!
//! A pipeline is an ordered list of named steps. Each step holds one or more
//! asynchronous handlers that operate on a shared, lockable context
//! (`ContextData<TData>`). Handlers may:
//!  - continue to the next handler/step (`PipelineControl::Continue`),
//!  - halt the run early (`PipelineControl::Stop`),
//!  - fail, which ends the run and hands the error back to the caller.
//!
//! The pipeline definition is built once and shared; every run gets its own
//! context, so concurrent runs never see each other's state.

pub mod core;
pub mod error;
pub mod pipeline;

// --- Re-exports for the Public API ---

pub use crate::core::context_data::ContextData;
pub use crate::core::control::{PipelineControl, PipelineResult};
pub use crate::core::step::{Handler, StepDef};

pub use crate::pipeline::definition::Pipeline;

pub use crate::error::FlowError;

/*
    Typical usage:
    1. Define a context struct `MyCtx` holding the request's inputs and outputs.
    2. Create a `Pipeline<MyCtx, MyError>` with its step names, in order.
    3. Attach async handlers with `.on_root("step", handler)`.
    4. Per request: `pipeline.run(ContextData::new(my_ctx)).await`.
    `MyError` must implement `From<FlowError>` so runner failures
    (e.g. a step left without handlers) surface in the caller's error type.
*/
