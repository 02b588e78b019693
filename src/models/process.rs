//! Process model.
//!
//! A process is the schedulable unit of the simulator. The input record
//! (`Process`) is immutable once a simulation starts; every run builds a
//! fresh `ProcessState` from it and, once the run completes, freezes that
//! state into a `ScheduledProcess` carrying the derived times.
//!
//! # Derived Times
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Priority assumed when a process specification omits one.
pub const DEFAULT_PRIORITY: i32 = 1;

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

/// A process specification (simulation input).
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU demand in ticks.
    pub burst_time: i64,
    /// Scheduling priority (lower value = more important).
    #[serde(default = "default_priority")]
    pub priority: i32,
}

impl Process {
    /// Creates a process with the default priority.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Mutable run-state of one process during one simulation run.
///
/// Owned exclusively by the run that created it; never shared between runs.
#[derive(Debug, Clone)]
pub struct ProcessState {
    /// The immutable specification this state was built from.
    pub process: Process,
    /// CPU ticks still owed to the process.
    pub remaining_time: i64,
    /// First dispatch tick. `None` until the process first gets the CPU.
    pub start_time: Option<i64>,
    /// Tick at which `remaining_time` reached zero.
    pub completion_time: Option<i64>,
}

impl ProcessState {
    /// Creates a fresh run-state from a specification.
    pub fn new(process: &Process) -> Self {
        Self {
            process: process.clone(),
            remaining_time: process.burst_time,
            start_time: None,
            completion_time: None,
        }
    }

    /// Process ID.
    #[inline]
    pub fn id(&self) -> &str {
        &self.process.id
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.process.arrival_time <= time
    }

    /// Whether all CPU demand has been served.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time <= 0
    }

    /// Records the first dispatch. Later dispatches leave the start untouched.
    ///
    /// Returns `true` if this was the first dispatch.
    pub fn mark_dispatched(&mut self, time: i64) -> bool {
        if self.start_time.is_some() {
            return false;
        }
        self.start_time = Some(time);
        true
    }

    /// Grants `ticks` of CPU time ending at `end`.
    ///
    /// Sets the completion time when the remaining time reaches zero.
    pub fn run_for(&mut self, ticks: i64, end: i64) {
        self.remaining_time -= ticks;
        if self.is_finished() {
            self.completion_time = Some(end);
        }
    }

    /// Freezes the run-state into an annotated output record.
    ///
    /// Fails with [`SimulationError::Incomplete`] if the run left any
    /// field unset.
    pub fn finish(&self) -> Result<ScheduledProcess, SimulationError> {
        let incomplete = || SimulationError::Incomplete {
            id: self.process.id.clone(),
        };
        if !self.is_finished() {
            return Err(incomplete());
        }
        let start_time = self.start_time.ok_or_else(incomplete)?;
        let completion_time = self.completion_time.ok_or_else(incomplete)?;
        Ok(ScheduledProcess::new(&self.process, start_time, completion_time))
    }
}

/// A process annotated with the times produced by a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledProcess {
    pub id: String,
    pub arrival_time: i64,
    pub burst_time: i64,
    pub priority: i32,
    /// First dispatch tick.
    pub start_time: i64,
    /// Tick at which the process finished.
    pub completion_time: i64,
    /// completion - arrival.
    pub turnaround_time: i64,
    /// turnaround - burst.
    pub waiting_time: i64,
    /// start - arrival.
    pub response_time: i64,
}

impl ScheduledProcess {
    /// Builds the record, deriving turnaround, waiting and response times.
    pub fn new(process: &Process, start_time: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            start_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            response_time: start_time - process.arrival_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 2, 5).with_priority(3);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.burst_time, 5);
        assert_eq!(p.priority, 3);
        assert_eq!(Process::new("P2", 0, 1).priority, DEFAULT_PRIORITY);
    }

    #[test]
    fn test_state_first_dispatch_only() {
        let mut s = ProcessState::new(&Process::new("P1", 1, 4));
        assert!(s.mark_dispatched(3));
        assert!(!s.mark_dispatched(7));
        assert_eq!(s.start_time, Some(3));
    }

    #[test]
    fn test_state_completion() {
        let mut s = ProcessState::new(&Process::new("P1", 1, 4));
        s.mark_dispatched(2);
        s.run_for(3, 5);
        assert!(!s.is_finished());
        assert_eq!(s.completion_time, None);
        s.run_for(1, 9);
        assert!(s.is_finished());
        assert_eq!(s.completion_time, Some(9));

        let done = s.finish().unwrap();
        assert_eq!(done.turnaround_time, 8);
        assert_eq!(done.waiting_time, 4);
        assert_eq!(done.response_time, 1);
        assert_eq!(done.turnaround_time, done.waiting_time + done.burst_time);
    }

    #[test]
    fn test_state_without_demand_is_finished() {
        let s = ProcessState::new(&Process::new("P1", 0, 0));
        assert!(s.is_finished());
        let s = ProcessState::new(&Process::new("P2", 0, -3));
        assert!(s.is_finished());
    }

    #[test]
    fn test_state_unfinished_is_incomplete() {
        let s = ProcessState::new(&Process::new("P1", 0, 2));
        let err = s.finish().unwrap_err();
        assert!(matches!(err, SimulationError::Incomplete { ref id } if id == "P1"));
    }

    #[test]
    fn test_priority_defaults_when_missing() {
        let p: Process =
            serde_json::from_str(r#"{"id":"P9","arrivalTime":4,"burstTime":2}"#).unwrap();
        assert_eq!(p.priority, DEFAULT_PRIORITY);
        assert_eq!(p.arrival_time, 4);
    }
}
