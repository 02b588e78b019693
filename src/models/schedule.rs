//! Schedule (simulation output) model.
//!
//! A schedule pairs the execution timeline of one run with every input
//! process annotated with its derived times.

use serde::{Deserialize, Serialize};

use super::{ScheduledProcess, Timeline};

/// The finished output of one policy run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Normalized execution timeline.
    pub timeline: Timeline,
    /// Annotated processes, in input order.
    pub processes: Vec<ScheduledProcess>,
}

impl Schedule {
    /// Creates a schedule.
    pub fn new(timeline: Timeline, processes: Vec<ScheduledProcess>) -> Self {
        Self {
            timeline,
            processes,
        }
    }

    /// Makespan: end of the timeline.
    pub fn makespan(&self) -> i64 {
        self.timeline.total_time()
    }

    /// Finds the annotated record of a process.
    pub fn process(&self, process_id: &str) -> Option<&ScheduledProcess> {
        self.processes.iter().find(|p| p.id == process_id)
    }

    /// Process IDs ordered by completion time (input order on ties).
    pub fn completion_order(&self) -> Vec<&str> {
        let mut done: Vec<&ScheduledProcess> = self.processes.iter().collect();
        done.sort_by_key(|p| p.completion_time);
        done.into_iter().map(|p| p.id.as_str()).collect()
    }

    /// Number of times each process was dispatched, in input order.
    ///
    /// Counts timeline entries, so it is exact only for a normalized
    /// timeline.
    pub fn dispatch_counts(&self) -> Vec<(&str, usize)> {
        self.processes
            .iter()
            .map(|p| (p.id.as_str(), self.timeline.entries_for(&p.id).len()))
            .collect()
    }
}
