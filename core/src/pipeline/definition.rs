// ingest_flow/src/pipeline/definition.rs

//! The `Pipeline<TData, Err>` struct and its construction.

use crate::core::step::{Handler, StepDef};
use crate::error::FlowError;
use std::collections::HashMap;

/// An ordered set of named steps over a root data type `TData`.
///
/// `Err` is the error type handlers return. It must be `From<FlowError>` so
/// that runner-level failures surface through the same type.
pub struct Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  pub(crate) steps: Vec<StepDef>,
  pub(crate) on: HashMap<String, Vec<Handler<TData, Err>>>,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Creates a pipeline whose steps run in the given order.
  ///
  /// Panics on a duplicated step name; that is a setup bug, not a runtime error.
  pub fn new(step_names: &[&str]) -> Self {
    let mut steps: Vec<StepDef> = Vec::with_capacity(step_names.len());
    for name in step_names {
      if steps.iter().any(|s| s.name == *name) {
        panic!("Pipeline setup error: step '{}' declared twice.", name);
      }
      steps.push(StepDef { name: (*name).to_string() });
    }

    Self {
      steps,
      on: HashMap::new(),
    }
  }

  /// Step names in execution order.
  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  pub(crate) fn ensure_step_exists(&self, step_name: &str) {
    if !self.steps.iter().any(|s| s.name == step_name) {
      panic!("Pipeline setup error: step '{}' not found in pipeline definition.", step_name);
    }
  }
}
