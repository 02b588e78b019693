//! Input validation for simulation requests.
//!
//! Checks structural integrity of a process list before any policy runs.
//! Detects:
//! - Empty process lists
//! - Missing or duplicate IDs
//! - Negative arrival times and non-positive burst times
//! - A missing or non-positive quantum for Round Robin
//!
//! Policies assume validated input; they never re-check these conditions.

use std::collections::HashSet;

use crate::models::Process;
use crate::scheduler::Algorithm;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessList,
    /// A process has a blank ID.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process demands no CPU time.
    NonPositiveBurst,
    /// Round Robin without a quantum ≥ 1.
    InvalidQuantum,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of a simulation request.
///
/// Checks:
/// 1. At least one process
/// 2. Every ID is non-blank and unique
/// 3. `arrival_time >= 0`
/// 4. `burst_time >= 1`
/// 5. `time_quantum >= 1` when the policy is Round Robin
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    processes: &[Process],
    algorithm: Algorithm,
    time_quantum: Option<i64>,
) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessList,
            "Please add at least one process",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Process ID is required",
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}': arrival time must be non-negative (got {})",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}': burst time must be positive (got {})",
                    p.id, p.burst_time
                ),
            ));
        }
    }

    if algorithm.needs_quantum() {
        match time_quantum {
            Some(q) if q >= 1 => {}
            Some(q) => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Time quantum must be a positive integer (got {q})"),
            )),
            None => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                "Round Robin requires a time quantum",
            )),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
