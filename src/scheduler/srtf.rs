//! Shortest Remaining Time First (preemptive SJF).
//!
//! # Algorithm
//!
//! The clock advances one tick at a time. Each tick, among arrived and
//! unfinished processes, the one with the least remaining time runs
//! (earliest arrival breaks ties). Consecutive ticks of the same process,
//! and consecutive idle stretches, are fused into the timeline as they are
//! produced, so no separate normalization pass is needed. When nothing is
//! runnable the clock jumps straight to the next arrival.
//!
//! # Complexity
//! O(T · n) where T is the total burst time.

use tracing::debug;

use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::error::SimulationError;
use crate::models::{Process, Schedule};

use super::run::RunState;
use super::Algorithm;

/// Schedules with unit-step preemption by remaining time.
///
/// # Example
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::srtf;
///
/// let s = srtf::schedule(&[Process::new("P1", 0, 8), Process::new("P2", 1, 4)]).unwrap();
/// assert_eq!(s.process("P2").unwrap().completion_time, 5);
/// assert_eq!(s.process("P1").unwrap().completion_time, 12);
/// ```
pub fn schedule(processes: &[Process]) -> Result<Schedule, SimulationError> {
    let engine = RuleEngine::new()
        .with_rule(rules::ShortestRemaining)
        .with_tie_breaker(rules::EarliestArrival);
    let mut run = RunState::start(processes, Algorithm::Srtf, None)?;
    let mut last: Option<usize> = None;

    while !run.all_finished() {
        let available = run.available();
        let context = SchedulingContext::at_time(run.current_time);
        let Some(chosen) = engine.select_best(&run.states, &available, &context) else {
            run.idle_until_next_arrival()?;
            last = None;
            continue;
        };

        if let Some(prev) = last.filter(|&p| p != chosen && !run.states[p].is_finished()) {
            debug!(
                preempted = run.states[prev].id(),
                by = run.states[chosen].id(),
                time = run.current_time,
                "preemption"
            );
        }

        let tick = run.execute(chosen, 1);
        run.timeline.push_merged(tick);
        last = Some(chosen);
    }

    run.into_schedule()
}
