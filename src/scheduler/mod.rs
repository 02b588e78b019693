//! CPU scheduling policies, simulation entry point and KPI evaluation.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | No | Arrival order |
//! | SJF | No | Shortest burst |
//! | SRTF | Every tick | Shortest remaining, then earliest arrival |
//! | Priority | No | Lowest priority value |
//! | Priority (preemptive) | Every tick | Lowest priority value |
//! | Round Robin | Every quantum | FIFO ready queue |
//!
//! Every policy is a pure function of its input: it builds fresh run-state
//! from the specifications, runs to completion, and returns a normalized
//! timeline with the annotated processes.
//!
//! # KPI
//!
//! `SimulationKpi` computes average waiting, turnaround and response time
//! plus CPU utilization.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod algorithm;
pub mod fcfs;
mod kpi;
pub mod priority;
pub mod round_robin;
mod run;
mod simulator;
pub mod sjf;
pub mod srtf;

pub use algorithm::{Algorithm, DEFAULT_TIME_QUANTUM};
pub use kpi::SimulationKpi;
pub use simulator::{
    compare_algorithms, run_simulation, SimulationRequest, SimulationResult, Simulator,
};

#[cfg(test)]
mod tests {
    //! Invariants that must hold for every policy on every workload.

    use super::*;
    use crate::models::{EntryKind, Process};
    use crate::workload::{sample_processes, WorkloadConfig, WorkloadGenerator};

    fn run_all(processes: &[Process], quantum: i64) -> Vec<SimulationResult> {
        compare_algorithms(processes, quantum).unwrap()
    }

    fn workloads() -> Vec<Vec<Process>> {
        let mut sets = vec![
            sample_processes(),
            vec![Process::new("solo", 0, 4)],
            vec![Process::new("late", 9, 2), Process::new("early", 1, 1)],
        ];
        for seed in 0..20 {
            let config = WorkloadConfig::default()
                .with_count(1 + (seed as usize % 8))
                .with_max_arrival(15);
            sets.push(WorkloadGenerator::new(config, seed).generate());
        }
        sets
    }

    #[test]
    fn test_timeline_contiguous_and_burst_conserved() {
        for procs in workloads() {
            for quantum in [1, 2, 5] {
                for result in run_all(&procs, quantum) {
                    let s = &result.schedule;
                    assert!(s.timeline.is_contiguous(), "{}", result.algorithm);
                    for p in &procs {
                        assert_eq!(
                            s.timeline.busy_time_for(&p.id),
                            p.burst_time,
                            "{} {}",
                            result.algorithm,
                            p.id
                        );
                    }
                    let first_arrival = procs.iter().map(|p| p.arrival_time).min().unwrap();
                    let total_burst: i64 = procs.iter().map(|p| p.burst_time).sum();
                    assert!(s.makespan() >= first_arrival + total_burst);
                }
            }
        }
    }

    #[test]
    fn test_process_time_invariants() {
        for procs in workloads() {
            for result in run_all(&procs, 3) {
                let s = &result.schedule;
                assert_eq!(s.processes.len(), procs.len());
                for (spec, done) in procs.iter().zip(&s.processes) {
                    assert_eq!(spec.id, done.id);
                    assert_eq!(done.turnaround_time, done.waiting_time + done.burst_time);
                    assert_eq!(done.response_time, done.start_time - done.arrival_time);
                    assert!(done.start_time >= done.arrival_time);
                    assert!(done.completion_time > done.start_time);
                    assert!(done.completion_time >= done.arrival_time + done.burst_time);
                    assert!(done.waiting_time >= done.response_time);
                    // Starts exactly at its first execution entry.
                    let first = s.timeline.entries_for(&done.id)[0];
                    assert_eq!(first.start, done.start_time);
                    let last = s.timeline.entries_for(&done.id).last().copied().unwrap();
                    assert_eq!(last.end, done.completion_time);
                }
            }
        }
    }

    #[test]
    fn test_non_preemptive_single_entry_per_process() {
        for procs in workloads() {
            for result in run_all(&procs, 2) {
                if result.algorithm.is_preemptive() {
                    continue;
                }
                for (_, count) in result.schedule.dispatch_counts() {
                    assert_eq!(count, 1, "{}", result.algorithm);
                }
                for p in &result.schedule.processes {
                    assert_eq!(p.completion_time, p.start_time + p.burst_time);
                }
            }
        }
    }

    #[test]
    fn test_timelines_are_normalized() {
        for procs in workloads() {
            for result in run_all(&procs, 1) {
                let t = &result.schedule.timeline;
                assert_eq!(&t.normalized(), t, "{}", result.algorithm);
                assert!(t.entries().iter().all(|e| {
                    (e.kind == EntryKind::Process) == e.process_id.is_some()
                }));
            }
        }
    }

    #[test]
    fn test_kpi_for_every_policy() {
        for procs in workloads() {
            for result in run_all(&procs, 4) {
                let kpi = result.kpi().unwrap();
                assert!(kpi.cpu_utilization > 0.0 && kpi.cpu_utilization <= 100.0);
                let no_idle = !result
                    .schedule
                    .timeline
                    .entries()
                    .iter()
                    .any(|e| e.is_idle());
                if no_idle {
                    assert!((kpi.cpu_utilization - 100.0).abs() < 1e-10);
                }
                assert!(kpi.avg_turnaround >= kpi.avg_waiting);
            }
        }
    }

    #[test]
    fn test_sjf_minimizes_average_waiting_when_all_arrive_together() {
        let procs = vec![
            Process::new("A", 0, 6),
            Process::new("B", 0, 8),
            Process::new("C", 0, 7),
            Process::new("D", 0, 3),
        ];
        let results = run_all(&procs, 4);
        let sjf_wait = results[1].kpi().unwrap().avg_waiting;
        for r in &results {
            assert!(sjf_wait <= r.kpi().unwrap().avg_waiting + 1e-10, "{}", r.algorithm);
        }
        assert!((sjf_wait - 7.0).abs() < 1e-10); // (3 + 16 + 9 + 0) / 4
    }
}
