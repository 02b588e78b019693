//! Scheduling policy catalogue.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Quantum used when a caller opts into a default for Round Robin.
pub const DEFAULT_TIME_QUANTUM: i64 = 3;

/// A CPU scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First Come First Serve.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Shortest Remaining Time First (preemptive SJF).
    Srtf,
    /// Priority, non-preemptive.
    Priority,
    /// Priority, preemptive.
    PriorityPreemptive,
    /// Round Robin with a fixed quantum.
    #[serde(rename = "rr")]
    RoundRobin,
}

impl Algorithm {
    /// Every policy, in catalogue order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::Priority,
        Algorithm::PriorityPreemptive,
        Algorithm::RoundRobin,
    ];

    /// Short selector (`fcfs`, `sjf`, `srtf`, `priority`, `priority_preemptive`, `rr`).
    pub fn selector(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::Srtf => "srtf",
            Algorithm::Priority => "priority",
            Algorithm::PriorityPreemptive => "priority_preemptive",
            Algorithm::RoundRobin => "rr",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First Come First Serve (FCFS)",
            Algorithm::Sjf => "Shortest Job First (SJF)",
            Algorithm::Srtf => "Shortest Remaining Time First (SRTF)",
            Algorithm::Priority => "Priority Scheduling (Non-Preemptive)",
            Algorithm::PriorityPreemptive => "Priority Scheduling (Preemptive)",
            Algorithm::RoundRobin => "Round Robin (RR)",
        }
    }

    /// One-line description of the policy.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => {
                "Non-preemptive algorithm where processes are executed in order of arrival"
            }
            Algorithm::Sjf => "Non-preemptive algorithm that executes shortest jobs first",
            Algorithm::Srtf => {
                "Preemptive version of SJF that can interrupt running processes"
            }
            Algorithm::Priority => {
                "Non-preemptive algorithm that executes highest priority processes first"
            }
            Algorithm::PriorityPreemptive => {
                "Preemptive priority scheduling that can interrupt lower priority processes"
            }
            Algorithm::RoundRobin => {
                "Preemptive algorithm with fixed time quantum for fair scheduling"
            }
        }
    }

    /// Whether a running process can lose the CPU before it finishes.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Algorithm::Srtf | Algorithm::PriorityPreemptive | Algorithm::RoundRobin
        )
    }

    /// Whether the policy reads process priorities.
    pub fn needs_priority(&self) -> bool {
        matches!(self, Algorithm::Priority | Algorithm::PriorityPreemptive)
    }

    /// Whether the policy requires a time quantum.
    pub fn needs_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.selector().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SimulationError::UnknownAlgorithm(s.to_string()))
    }
}
