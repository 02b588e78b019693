//! Round Robin.
//!
//! # Algorithm
//!
//! 1. At t=0, enqueue every process that has already arrived.
//! 2. If the ready queue is empty, idle until the earliest pending arrival
//!    and enqueue everything that has arrived by then.
//! 3. Otherwise dequeue the head and run it for `min(quantum, remaining)`.
//! 4. Enqueue processes that arrived during the slice (arrival order, input
//!    order on ties), then re-enqueue the slice's process if unfinished.
//!
//! Queue membership is tracked with a per-process flag.

use std::collections::VecDeque;

use tracing::debug;

use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::error::SimulationError;
use crate::models::{Process, Schedule};

use super::run::RunState;
use super::Algorithm;

/// FIFO ready queue with O(1) membership checks.
struct ReadyQueue {
    queue: VecDeque<usize>,
    queued: Vec<bool>,
}

impl ReadyQueue {
    fn new(len: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(len),
            queued: vec![false; len],
        }
    }

    fn push(&mut self, index: usize) {
        if !self.queued[index] {
            self.queued[index] = true;
            self.queue.push_back(index);
        }
    }

    fn pop(&mut self) -> Option<usize> {
        let index = self.queue.pop_front()?;
        self.queued[index] = false;
        Some(index)
    }

    /// Enqueues arrived, unfinished processes in `arrival_order`, skipping
    /// `exclude`.
    fn admit(&mut self, run: &RunState, arrival_order: &[usize], exclude: Option<usize>) {
        for &index in arrival_order {
            let state = &run.states[index];
            if Some(index) != exclude
                && state.has_arrived(run.current_time)
                && !state.is_finished()
            {
                self.push(index);
            }
        }
    }
}

/// Schedules with a fixed time quantum.
///
/// Fails with [`SimulationError::InvalidInput`] if `time_quantum < 1` or
/// the processes fail validation.
///
/// # Example
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::round_robin;
///
/// let s = round_robin::schedule(&[Process::new("A", 0, 5), Process::new("B", 1, 3)], 2).unwrap();
/// assert_eq!(s.process("B").unwrap().completion_time, 7);
/// assert_eq!(s.process("A").unwrap().completion_time, 8);
/// ```
pub fn schedule(processes: &[Process], time_quantum: i64) -> Result<Schedule, SimulationError> {
    let mut run = RunState::start(processes, Algorithm::RoundRobin, Some(time_quantum))?;
    let all: Vec<usize> = (0..processes.len()).collect();
    let arrival_order = RuleEngine::new()
        .with_rule(rules::EarliestArrival)
        .sort_candidates(&run.states, &all, &SchedulingContext::at_time(0));

    let mut ready = ReadyQueue::new(processes.len());
    ready.admit(&run, &arrival_order, None);

    while !run.all_finished() {
        let Some(index) = ready.pop() else {
            run.idle_until_next_arrival()?;
            ready.admit(&run, &arrival_order, None);
            continue;
        };

        let ticks = time_quantum.min(run.states[index].remaining_time);
        let slice = run.execute(index, ticks);
        run.timeline.push(slice);

        ready.admit(&run, &arrival_order, Some(index));
        if !run.states[index].is_finished() {
            debug!(
                process = run.states[index].id(),
                time = run.current_time,
                remaining = run.states[index].remaining_time,
                "quantum expired"
            );
            ready.push(index);
        }
    }

    run.timeline = run.timeline.normalized();
    run.into_schedule()
}
