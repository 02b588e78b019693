//! Shortest Job First (non-preemptive).
//!
//! # Algorithm
//!
//! Repeat until every process finished:
//! 1. Collect arrived, unfinished processes (input order).
//! 2. If none, idle until the earliest pending arrival.
//! 3. Otherwise pick the best candidate by the rule engine and run it to
//!    completion in one block.
//!
//! Non-preemptive Priority shares this loop with a different rule.
//!
//! # Complexity
//! O(n²), fine at simulator scale.

use tracing::debug;

use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::error::SimulationError;
use crate::models::{Process, Schedule};

use super::run::RunState;
use super::Algorithm;

/// Schedules the shortest arrived burst first, without preemption.
pub fn schedule(processes: &[Process]) -> Result<Schedule, SimulationError> {
    let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
    run_to_completion(processes, Algorithm::Sjf, &engine)
}

/// Non-preemptive selection loop driven by `engine`.
///
/// Fully tied candidates resolve to the earliest in input order.
pub(crate) fn run_to_completion(
    processes: &[Process],
    algorithm: Algorithm,
    engine: &RuleEngine,
) -> Result<Schedule, SimulationError> {
    let mut run = RunState::start(processes, algorithm, None)?;

    while !run.all_finished() {
        let available = run.available();
        let context = SchedulingContext::at_time(run.current_time);
        let Some(chosen) = engine.select_best(&run.states, &available, &context) else {
            run.idle_until_next_arrival()?;
            continue;
        };

        debug!(
            process = run.states[chosen].id(),
            time = run.current_time,
            candidates = available.len(),
            "selected"
        );
        let burst = run.states[chosen].remaining_time;
        let slice = run.execute(chosen, burst);
        run.timeline.push(slice);
    }

    run.into_schedule()
}
