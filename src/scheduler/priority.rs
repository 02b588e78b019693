//! Priority scheduling (lower value = higher priority).
//!
//! # Variants
//!
//! - **Non-preemptive**: the SJF selection loop with the priority rule; a
//!   chosen process runs to completion.
//! - **Preemptive**: unit-step loop that re-evaluates the choice every tick,
//!   so a newly arrived higher-priority process takes the CPU immediately.
//!   An uninterrupted run of one process is tracked as an open block and
//!   written to the timeline as one entry when the process changes or
//!   completes.
//!
//! Ties go to the earliest candidate in input order, including against the
//! process currently holding the CPU.

use tracing::debug;

use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::error::SimulationError;
use crate::models::{Process, Schedule, TimelineEntry};

use super::run::RunState;
use super::sjf;
use super::Algorithm;

fn priority_engine() -> RuleEngine {
    RuleEngine::new().with_rule(rules::HighestPriority)
}

/// Schedules by priority without preemption.
pub fn schedule_non_preemptive(processes: &[Process]) -> Result<Schedule, SimulationError> {
    sjf::run_to_completion(processes, Algorithm::Priority, &priority_engine())
}

/// Open execution block: which process, since when.
#[derive(Debug, Clone, Copy)]
struct Block {
    index: usize,
    start: i64,
}

fn close_block(run: &mut RunState, block: Block) {
    let entry = TimelineEntry::process(run.states[block.index].id(), block.start, run.current_time);
    run.timeline.push(entry);
}

/// Schedules by priority, preempting at every tick.
///
/// # Example
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::priority;
///
/// let s = priority::schedule_preemptive(&[
///     Process::new("low", 0, 4).with_priority(5),
///     Process::new("high", 2, 1).with_priority(1),
/// ])
/// .unwrap();
/// assert_eq!(s.process("high").unwrap().completion_time, 3);
/// assert_eq!(s.process("low").unwrap().completion_time, 5);
/// ```
pub fn schedule_preemptive(processes: &[Process]) -> Result<Schedule, SimulationError> {
    let engine = priority_engine();
    let mut run = RunState::start(processes, Algorithm::PriorityPreemptive, None)?;
    let mut open: Option<Block> = None;

    while !run.all_finished() {
        let available = run.available();
        let context = SchedulingContext::at_time(run.current_time);
        let Some(chosen) = engine.select_best(&run.states, &available, &context) else {
            if let Some(block) = open.take() {
                close_block(&mut run, block);
            }
            run.idle_until_next_arrival()?;
            continue;
        };

        if let Some(block) = open.filter(|b| b.index != chosen) {
            debug!(
                preempted = run.states[block.index].id(),
                by = run.states[chosen].id(),
                time = run.current_time,
                "preemption"
            );
            close_block(&mut run, block);
            open = None;
        }
        let block = *open.get_or_insert(Block {
            index: chosen,
            start: run.current_time,
        });

        run.execute(chosen, 1);

        if run.states[chosen].is_finished() {
            close_block(&mut run, block);
            open = None;
        }
    }

    run.timeline = run.timeline.normalized();
    run.into_schedule()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: &str, arrival: i64, burst: i64, priority: i32) -> Process {
        Process::new(id, arrival, burst).with_priority(priority)
    }

    #[test]
    fn test_non_preemptive_sample() {
        let s = schedule_non_preemptive(&[
            p("P1", 0, 5, 2),
            p("P2", 1, 3, 1),
            p("P3", 2, 8, 3),
            p("P4", 3, 6, 2),
        ])
        .unwrap();
        assert_eq!(
            s.timeline.entries(),
            &[
                TimelineEntry::process("P1", 0, 5),
                TimelineEntry::process("P2", 5, 8),
                TimelineEntry::process("P4", 8, 14),
                TimelineEntry::process("P3", 14, 22),
            ]
        );
    }

    #[test]
    fn test_preemptive_sample() {
        let s = schedule_preemptive(&[
            p("P1", 0, 5, 2),
            p("P2", 1, 3, 1),
            p("P3", 2, 8, 3),
            p("P4", 3, 6, 2),
        ])
        .unwrap();
        assert_eq!(
            s.timeline.entries(),
            &[
                TimelineEntry::process("P1", 0, 1),
                TimelineEntry::process("P2", 1, 4),
                TimelineEntry::process("P1", 4, 8),
                TimelineEntry::process("P4", 8, 14),
                TimelineEntry::process("P3", 14, 22),
            ]
        );
        let p1 = s.process("P1").unwrap();
        assert_eq!((p1.start_time, p1.completion_time, p1.waiting_time), (0, 8, 3));
    }

    #[test]
    fn test_preemptive_tie_goes_to_input_order() {
        // Equal priority: B is listed first, so it takes the CPU as soon as it arrives.
        let s = schedule_preemptive(&[p("B", 1, 2, 1), p("A", 0, 3, 1)]).unwrap();
        assert_eq!(
            s.timeline.entries(),
            &[
                TimelineEntry::process("A", 0, 1),
                TimelineEntry::process("B", 1, 3),
                TimelineEntry::process("A", 3, 5),
            ]
        );
    }

    #[test]
    fn test_preemptive_closes_block_before_idle() {
        let s = schedule_preemptive(&[p("A", 0, 2, 1), p("B", 5, 1, 1)]).unwrap();
        assert_eq!(
            s.timeline.entries(),
            &[
                TimelineEntry::process("A", 0, 2),
                TimelineEntry::idle(2, 5),
                TimelineEntry::process("B", 5, 6),
            ]
        );
    }

    #[test]
    fn test_both_variants_reject_negative_burst() {
        let procs = [p("A", 0, -1, 1)];
        assert!(matches!(
            schedule_preemptive(&procs),
            Err(SimulationError::InvalidInput(_))
        ));
        assert!(matches!(
            schedule_non_preemptive(&procs),
            Err(SimulationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_preemptive_burst_preserved() {
        let procs = [p("A", 0, 6, 3), p("B", 1, 2, 2), p("C", 2, 1, 1)];
        let s = schedule_preemptive(&procs).unwrap();
        for proc in &procs {
            assert_eq!(s.timeline.busy_time_for(&proc.id), proc.burst_time);
        }
        assert_eq!(s.process("A").unwrap().start_time, 0);
    }
}
