//! Built-in dispatching rules.
//!
//! | Rule | Score | Policy |
//! |------|-------|--------|
//! | `EarliestArrival` | -(time waited so far) | FCFS, RR admission, SRTF tie-break |
//! | `ShortestBurst` | total burst | SJF |
//! | `ShortestRemaining` | remaining burst | SRTF |
//! | `HighestPriority` | priority value | Priority (both variants) |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//! Tick values are converted with `as f64`, exact up to 2^53 ticks.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::ProcessState;

/// First Come First Served.
///
/// Prioritizes the process that has been waiting longest at
/// `context.current_time`. Within one context this orders candidates by
/// arrival time; processes not yet arrived get positive scores.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl DispatchingRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &ProcessState, context: &SchedulingContext) -> RuleScore {
        -((context.current_time - process.process.arrival_time) as f64)
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Shortest Job First.
///
/// Prioritizes processes with a smaller total CPU demand, regardless of
/// how much of it has been served.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &ProcessState, _context: &SchedulingContext) -> RuleScore {
        process.process.burst_time as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time.
///
/// Prioritizes processes closest to completion.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, process: &ProcessState, _context: &SchedulingContext) -> RuleScore {
        process.remaining_time as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Static priority.
///
/// Prioritizes processes with a numerically smaller `priority`.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &ProcessState, _context: &SchedulingContext) -> RuleScore {
        process.process.priority as f64
    }

    fn description(&self) -> &'static str {
        "Highest Priority (lowest value) First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn state(id: &str, arrival: i64, burst: i64, priority: i32) -> ProcessState {
        ProcessState::new(&Process::new(id, arrival, burst).with_priority(priority))
    }

    #[test]
    fn test_earliest_arrival() {
        let ctx = SchedulingContext::at_time(10);
        let first = state("first", 1, 5, 1);
        let second = state("second", 4, 1, 1);
        assert!(EarliestArrival.evaluate(&first, &ctx) < EarliestArrival.evaluate(&second, &ctx));
    }

    #[test]
    fn test_earliest_arrival_scores_time_waited() {
        let waiting = state("waiting", 3, 2, 1);
        let score = |p: &ProcessState, t: i64| EarliestArrival.evaluate(p, &SchedulingContext::at_time(t));
        assert!((score(&waiting, 10) + 7.0).abs() < 1e-10);
        assert!(score(&waiting, 3).abs() < 1e-10);

        let pending = state("pending", 8, 2, 1);
        let ctx = SchedulingContext::at_time(5);
        assert!(EarliestArrival.evaluate(&pending, &ctx) > 0.0);
        assert!(EarliestArrival.evaluate(&waiting, &ctx) < EarliestArrival.evaluate(&pending, &ctx));
    }

    #[test]
    fn test_shortest_burst_ignores_progress() {
        let ctx = SchedulingContext::at_time(0);
        let mut long = state("long", 0, 8, 1);
        long.remaining_time = 1;
        let short = state("short", 0, 3, 1);
        assert!(ShortestBurst.evaluate(&short, &ctx) < ShortestBurst.evaluate(&long, &ctx));
    }

    #[test]
    fn test_shortest_remaining() {
        let ctx = SchedulingContext::at_time(0);
        let mut almost_done = state("a", 0, 8, 1);
        almost_done.remaining_time = 1;
        let fresh = state("b", 0, 3, 1);
        assert!(
            ShortestRemaining.evaluate(&almost_done, &ctx)
                < ShortestRemaining.evaluate(&fresh, &ctx)
        );
    }

    #[test]
    fn test_highest_priority() {
        let ctx = SchedulingContext::at_time(0);
        let urgent = state("urgent", 0, 5, 1);
        let background = state("background", 0, 5, 9);
        assert!(
            HighestPriority.evaluate(&urgent, &ctx) < HighestPriority.evaluate(&background, &ctx)
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(EarliestArrival.name(), "FCFS");
        assert_eq!(ShortestBurst.description(), "Shortest Job First");
        assert_eq!(ShortestRemaining.name(), "SRT");
        assert_eq!(HighestPriority.name(), "PRIORITY");
    }
}
