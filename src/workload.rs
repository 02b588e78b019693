//! Process workloads for simulations.
//!
//! Provides the built-in sample set and a seeded random generator. Every
//! generated workload passes [`crate::validation::validate_input`]: IDs are
//! `P1..Pn`, arrivals are non-negative and bursts are at least one tick.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// The four-process sample set: P1(0,5,2), P2(1,3,1), P3(2,8,3), P4(3,6,2)
/// as (arrival, burst, priority).
pub fn sample_processes() -> Vec<Process> {
    vec![
        Process::new("P1", 0, 5).with_priority(2),
        Process::new("P2", 1, 3).with_priority(1),
        Process::new("P3", 2, 8).with_priority(3),
        Process::new("P4", 3, 6).with_priority(2),
    ]
}

/// Shape of a random workload. All ranges are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Arrivals are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    pub min_burst: i64,
    pub max_burst: i64,
    pub min_priority: i32,
    pub max_priority: i32,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            min_priority: 1,
            max_priority: 5,
        }
    }
}

impl WorkloadConfig {
    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the latest possible arrival.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst = min;
        self.max_burst = max;
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.min_priority = min;
        self.max_priority = max;
        self
    }
}

/// Seeded random workload generator.
///
/// # Example
/// ```
/// use u_cpusched::workload::{WorkloadConfig, WorkloadGenerator};
///
/// let config = WorkloadConfig::default().with_count(3);
/// let a = WorkloadGenerator::new(config.clone(), 7).generate();
/// let b = WorkloadGenerator::new(config, 7).generate();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    config: WorkloadConfig,
    rng: StdRng,
}

impl WorkloadGenerator {
    /// Creates a generator; the same config and seed yield the same workloads.
    pub fn new(config: WorkloadConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws one workload. Out-of-range bounds are clamped to a valid range.
    pub fn generate(&mut self) -> Vec<Process> {
        let c = &self.config;
        let max_arrival = c.max_arrival.max(0);
        let min_burst = c.min_burst.max(1);
        let max_burst = c.max_burst.max(min_burst);
        let min_priority = c.min_priority;
        let max_priority = c.max_priority.max(min_priority);

        (1..=c.count)
            .map(|n| {
                Process::new(
                    format!("P{n}"),
                    self.rng.random_range(0..=max_arrival),
                    self.rng.random_range(min_burst..=max_burst),
                )
                .with_priority(self.rng.random_range(min_priority..=max_priority))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Algorithm;
    use crate::validation::validate_input;

    #[test]
    fn test_sample_processes() {
        let sample = sample_processes();
        assert_eq!(sample.len(), 4);
        assert_eq!(sample[2], Process::new("P3", 2, 8).with_priority(3));
        assert!(validate_input(&sample, Algorithm::Fcfs, None).is_ok());
    }

    #[test]
    fn test_generated_workload_is_valid() {
        let config = WorkloadConfig::default()
            .with_count(12)
            .with_max_arrival(20)
            .with_burst_range(2, 4)
            .with_priority_range(1, 3);
        let procs = WorkloadGenerator::new(config, 42).generate();
        assert_eq!(procs.len(), 12);
        assert!(validate_input(&procs, Algorithm::Sjf, None).is_ok());
        for p in &procs {
            assert!((0..=20).contains(&p.arrival_time));
            assert!((2..=4).contains(&p.burst_time));
            assert!((1..=3).contains(&p.priority));
        }
    }

    #[test]
    fn test_degenerate_bounds_are_clamped() {
        let config = WorkloadConfig::default()
            .with_max_arrival(-5)
            .with_burst_range(0, -3);
        let procs = WorkloadGenerator::new(config, 1).generate();
        assert!(procs.iter().all(|p| p.arrival_time == 0 && p.burst_time == 1));
    }

    #[test]
    fn test_successive_draws_keep_ids_but_vary_values() {
        let mut generator = WorkloadGenerator::new(WorkloadConfig::default(), 3);
        let first = generator.generate();
        let second = generator.generate();
        let ids = |v: &[Process]| v.iter().map(|p| p.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
        assert_ne!(first, second);
    }

    #[test]
    fn test_config_from_json_uses_defaults() {
        let config: WorkloadConfig = serde_json::from_str(r#"{"count": 2}"#).unwrap();
        assert_eq!(config.count, 2);
        assert_eq!(config.max_burst, WorkloadConfig::default().max_burst);
    }
}
