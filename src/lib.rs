//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Given a set of processes (arrival, burst, optional priority) and a
//! policy, computes the execution timeline and per-process waiting,
//! turnaround and response times, plus CPU utilization. This is an
//! educational simulator; nothing is actually executed.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessState`, `ScheduledProcess`,
//!   `Timeline`, `TimelineEntry`, `Schedule`
//! - **`dispatching`**: Selection rules (SJF, SRT, priority, arrival) and the rule engine
//! - **`scheduler`**: The six policies, the `Simulator` entry point, and KPIs
//! - **`validation`**: Input integrity checks (empty lists, duplicate IDs, bad times, quantum)
//! - **`workload`**: Sample and seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler::{run_simulation, Algorithm, SimulationRequest};
//!
//! let request = SimulationRequest::new(
//!     vec![Process::new("P1", 0, 8), Process::new("P2", 1, 4)],
//!     Algorithm::Srtf,
//! );
//! let result = run_simulation(&request).unwrap();
//! assert_eq!(result.schedule.timeline.len(), 3);
//! assert_eq!(result.kpi().unwrap().avg_waiting, 2.0);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
