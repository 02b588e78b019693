//! Simulation error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by a simulation request.
///
/// `InvalidInput` and `UnknownAlgorithm` are precondition failures (fix the
/// input). `Exhausted` and `Incomplete` indicate a defect in a policy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The request failed input validation.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The algorithm selector is not one of the supported policies.
    #[error("unknown algorithm '{0}' (expected fcfs, sjf, srtf, priority, priority_preemptive or rr)")]
    UnknownAlgorithm(String),

    /// No candidate could be selected although work remains.
    #[error("no runnable process at t={time} with {remaining} process(es) unfinished")]
    Exhausted { time: i64, remaining: usize },

    /// A run ended with a process whose times were never set.
    #[error("process '{id}' finished the run without completing")]
    Incomplete { id: String },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
