// ingest_flow/src/core/control.rs

//! Signals for controlling pipeline flow and the outcome of a run.

/// Signal from a handler indicating whether the run should go on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineControl {
  /// Proceed with the remaining handlers of this step, then the next step.
  Continue,
  /// Halt immediately. No further handlers or steps execute.
  Stop,
}

/// Outcome of a run that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineResult {
  /// Every step ran to completion.
  Completed,
  /// A handler returned `PipelineControl::Stop`.
  Stopped,
}
