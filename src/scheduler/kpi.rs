//! Simulation quality metrics (KPIs).
//!
//! Aggregates the per-process times a policy produced, plus CPU
//! utilization over the timeline.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Response | mean(start - arrival) |
//! | CPU Utilization | (total - idle) / total × 100 |
//! | Throughput | processes / total time |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{ScheduledProcess, Timeline};

/// Aggregate performance indicators of one simulation run.
///
/// Derived on demand; never cached on the process records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationKpi {
    /// Number of processes.
    pub process_count: usize,
    /// Mean waiting time (ticks).
    pub avg_waiting: f64,
    /// Mean turnaround time (ticks).
    pub avg_turnaround: f64,
    /// Mean response time (ticks).
    pub avg_response: f64,
    /// Longest waiting time of any single process (ticks).
    pub max_waiting: i64,
    /// Busy share of the timeline, in percent (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// End of the timeline.
    pub total_time: i64,
    /// Sum of idle interval durations.
    pub idle_time: i64,
}

impl SimulationKpi {
    /// Computes KPIs from annotated processes and their timeline.
    ///
    /// Returns `None` if there are no processes or the timeline is empty.
    pub fn calculate(processes: &[ScheduledProcess], timeline: &Timeline) -> Option<Self> {
        let total_time = timeline.total_time();
        if processes.is_empty() || total_time <= 0 {
            return None;
        }

        let n = processes.len() as f64;
        let mean = |f: fn(&ScheduledProcess) -> i64| {
            processes.iter().map(f).sum::<i64>() as f64 / n
        };
        let idle_time = timeline.idle_time();

        Some(Self {
            process_count: processes.len(),
            avg_waiting: mean(|p| p.waiting_time),
            avg_turnaround: mean(|p| p.turnaround_time),
            avg_response: mean(|p| p.response_time),
            max_waiting: processes.iter().map(|p| p.waiting_time).max().unwrap_or(0),
            cpu_utilization: (total_time - idle_time) as f64 / total_time as f64 * 100.0,
            throughput: n / total_time as f64,
            total_time,
            idle_time,
        })
    }
}
