//! Per-run simulation state shared by every policy.
//!
//! A `RunState` owns fresh `ProcessState`s built from the input
//! specifications, the clock, and the timeline under construction. Policies
//! decide *what* runs; `RunState` does the bookkeeping of *running* it.

use tracing::debug;

use crate::error::SimulationError;
use crate::models::{Process, ProcessState, Schedule, Timeline, TimelineEntry};
use crate::validation::validate_input;

use super::Algorithm;

#[derive(Debug)]
pub(crate) struct RunState {
    pub states: Vec<ProcessState>,
    pub timeline: Timeline,
    pub current_time: i64,
    finished: usize,
}

impl RunState {
    /// Validates the input for `algorithm`, then builds fresh run-state.
    ///
    /// Every public policy enters through here, so no loop ever sees a
    /// burst that cannot reach zero.
    pub fn start(
        processes: &[Process],
        algorithm: Algorithm,
        time_quantum: Option<i64>,
    ) -> Result<Self, SimulationError> {
        validate_input(processes, algorithm, time_quantum).map_err(SimulationError::InvalidInput)?;
        Ok(Self::new(processes))
    }

    pub fn new(processes: &[Process]) -> Self {
        Self {
            states: processes.iter().map(ProcessState::new).collect(),
            timeline: Timeline::new(),
            current_time: 0,
            finished: 0,
        }
    }

    pub fn all_finished(&self) -> bool {
        self.finished == self.states.len()
    }

    /// Indices of arrived, unfinished processes, in input order.
    pub fn available(&self) -> Vec<usize> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, s)| s.has_arrived(self.current_time) && !s.is_finished())
            .map(|(i, _)| i)
            .collect()
    }

    /// Earliest arrival among unfinished processes.
    pub fn next_arrival(&self) -> Option<i64> {
        self.states
            .iter()
            .filter(|s| !s.is_finished())
            .map(|s| s.process.arrival_time)
            .min()
    }

    /// Emits one idle entry up to the next arrival and jumps the clock there.
    ///
    /// Only valid when nothing is runnable now; fails if no future arrival
    /// exists.
    pub fn idle_until_next_arrival(&mut self) -> Result<(), SimulationError> {
        let exhausted = SimulationError::Exhausted {
            time: self.current_time,
            remaining: self.states.len() - self.finished,
        };
        let next = match self.next_arrival() {
            Some(t) if t > self.current_time => t,
            _ => return Err(exhausted),
        };
        debug!(from = self.current_time, to = next, "cpu idle");
        self.timeline
            .push_merged(TimelineEntry::idle(self.current_time, next));
        self.current_time = next;
        Ok(())
    }

    /// Runs process `index` for `ticks` starting now and advances the clock.
    ///
    /// Returns the executed slice; the caller decides how it enters the
    /// timeline.
    pub fn execute(&mut self, index: usize, ticks: i64) -> TimelineEntry {
        let start = self.current_time;
        let end = start + ticks;
        let state = &mut self.states[index];

        if state.mark_dispatched(start) {
            debug!(process = state.id(), time = start, "first dispatch");
        }
        state.run_for(ticks, end);
        if state.is_finished() {
            self.finished += 1;
            debug!(process = state.id(), time = end, "completed");
        }

        self.current_time = end;
        TimelineEntry::process(state.id(), start, end)
    }

    /// Freezes every run-state into the finished schedule, in input order.
    pub fn into_schedule(self) -> Result<Schedule, SimulationError> {
        let processes = self
            .states
            .iter()
            .map(ProcessState::finish)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Schedule::new(self.timeline, processes))
    }
}
