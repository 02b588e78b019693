//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules sequentially: the first rule decides, each
//! following rule only breaks ties left by the ones before it. Candidates
//! still tied after the last rule keep their input order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::ProcessState;

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::RuleEngine;
/// use u_cpusched::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::ShortestRemaining)
///     .with_tie_breaker(rules::EarliestArrival);
/// assert_eq!(engine.rule_names(), vec!["SRT", "FCFS"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// Adds the primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts candidates by priority (highest priority first).
    ///
    /// `candidates` are indices into `processes`. The sort is stable, so
    /// fully tied candidates keep the order they were given in.
    pub fn sort_candidates(
        &self,
        processes: &[ProcessState],
        candidates: &[usize],
        context: &SchedulingContext,
    ) -> Vec<usize> {
        let mut sorted = candidates.to_vec();
        sorted.sort_by(|&a, &b| self.compare(&processes[a], &processes[b], context));
        sorted
    }

    /// Returns the index of the highest-priority candidate.
    ///
    /// Equivalent to the first element of [`Self::sort_candidates`], found
    /// in a single pass. The earliest candidate wins a full tie.
    pub fn select_best(
        &self,
        processes: &[ProcessState],
        candidates: &[usize],
        context: &SchedulingContext,
    ) -> Option<usize> {
        candidates.iter().copied().reduce(|best, next| {
            if self.compare(&processes[next], &processes[best], context) == Ordering::Less {
                next
            } else {
                best
            }
        })
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, process: &ProcessState, context: &SchedulingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|r| r.evaluate(process, context))
            .collect()
    }

    fn compare(&self, a: &ProcessState, b: &ProcessState, context: &SchedulingContext) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }
        Ordering::Equal
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
