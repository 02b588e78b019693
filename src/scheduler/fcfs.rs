//! First Come First Serve.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival time (stable: input order breaks ties).
//! 2. Walk the order; if the next process has not arrived, idle until it does.
//! 3. Run each process to completion in one block.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) thereafter.

use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::error::SimulationError;
use crate::models::{Process, Schedule};

use super::run::RunState;
use super::Algorithm;

/// Schedules processes in arrival order without preemption.
///
/// # Example
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::fcfs;
///
/// let schedule = fcfs::schedule(&[Process::new("P1", 0, 5), Process::new("P2", 1, 3)]).unwrap();
/// assert_eq!(schedule.process("P2").unwrap().waiting_time, 4);
/// ```
pub fn schedule(processes: &[Process]) -> Result<Schedule, SimulationError> {
    let mut run = RunState::start(processes, Algorithm::Fcfs, None)?;
    let all: Vec<usize> = (0..processes.len()).collect();
    let order = RuleEngine::new()
        .with_rule(rules::EarliestArrival)
        .sort_candidates(&run.states, &all, &SchedulingContext::at_time(0));

    for index in order {
        if !run.states[index].has_arrived(run.current_time) {
            run.idle_until_next_arrival()?;
        }
        let burst = run.states[index].remaining_time;
        let slice = run.execute(index, burst);
        run.timeline.push(slice);
    }

    run.into_schedule()
}
