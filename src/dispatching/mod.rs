//! Dispatching rules and rule engine for process selection.
//!
//! Every selecting policy (SJF, SRTF, Priority) answers the same question
//! at each decision point: among the arrived, unfinished processes, which
//! one gets the CPU? The answer is expressed as a chain of dispatching
//! rules evaluated by a [`RuleEngine`].
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{RuleEngine, SchedulingContext};
//! use u_cpusched::dispatching::rules;
//!
//! // SRTF: least remaining work, then earliest arrival.
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestRemaining)
//!     .with_tie_breaker(rules::EarliestArrival);
//!
//! let context = SchedulingContext::at_time(0);
//! // let chosen = engine.select_best(&states, &candidates, &context);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::RuleEngine;

use crate::models::ProcessState;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates how urgently a process should run.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should be dispatched first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "SRT").
    fn name(&self) -> &'static str;

    /// Evaluates a process given the current scheduling context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &ProcessState, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
