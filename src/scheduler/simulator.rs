//! Simulation entry point.
//!
//! # Flow
//!
//! 1. Validate the request (processes, policy, quantum).
//! 2. Run the selected policy on a fresh copy of the specifications.
//! 3. Return the normalized timeline and annotated processes.
//!
//! Metrics are derived from the result on demand via [`SimulationResult::kpi`].

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::SimulationError;
use crate::models::{Process, Schedule};
use crate::validation::{validate_input, ValidationError, ValidationErrorKind};

use super::{fcfs, priority, round_robin, sjf, srtf, Algorithm, SimulationKpi};

/// Input container for one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Process specifications, in input order.
    pub processes: Vec<Process>,
    /// Policy to simulate.
    pub algorithm: Algorithm,
    /// Slice length; required for Round Robin only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request without a quantum.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            time_quantum: None,
        }
    }

    /// Creates a request from a policy selector such as `"srtf"` or `"rr"`.
    pub fn from_selector(processes: Vec<Process>, selector: &str) -> Result<Self, SimulationError> {
        Ok(Self::new(processes, selector.parse()?))
    }

    /// Sets the Round Robin quantum.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = Some(time_quantum);
        self
    }
}

/// Output of one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub algorithm: Algorithm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_quantum: Option<i64>,
    /// Timeline and annotated processes.
    pub schedule: Schedule,
}

impl SimulationResult {
    /// Aggregate metrics; `None` only for an empty schedule.
    pub fn kpi(&self) -> Option<SimulationKpi> {
        SimulationKpi::calculate(&self.schedule.processes, &self.schedule.timeline)
    }
}

/// Runs simulation requests.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{Algorithm, SimulationRequest, Simulator};
///
/// let request = SimulationRequest::new(
///     vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)],
///     Algorithm::RoundRobin,
/// )
/// .with_time_quantum(2);
///
/// let result = Simulator::new().run(&request).unwrap();
/// let kpi = result.kpi().unwrap();
/// assert!((kpi.cpu_utilization - 100.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    default_time_quantum: Option<i64>,
}

impl Simulator {
    /// Creates a simulator that requires an explicit quantum for Round Robin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `time_quantum` for Round Robin requests that carry none.
    pub fn with_default_time_quantum(mut self, time_quantum: i64) -> Self {
        self.default_time_quantum = Some(time_quantum);
        self
    }

    /// Validates and runs one request.
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
        let algorithm = request.algorithm;
        let time_quantum = if algorithm.needs_quantum() {
            request.time_quantum.or(self.default_time_quantum)
        } else {
            None
        };

        if let Err(errors) = validate_input(&request.processes, algorithm, time_quantum) {
            warn!(%algorithm, errors = errors.len(), "simulation request rejected");
            return Err(SimulationError::InvalidInput(errors));
        }

        info!(
            %algorithm,
            processes = request.processes.len(),
            time_quantum,
            "simulation started"
        );

        let processes = &request.processes;
        let schedule = match algorithm {
            Algorithm::Fcfs => fcfs::schedule(processes),
            Algorithm::Sjf => sjf::schedule(processes),
            Algorithm::Srtf => srtf::schedule(processes),
            Algorithm::Priority => priority::schedule_non_preemptive(processes),
            Algorithm::PriorityPreemptive => priority::schedule_preemptive(processes),
            Algorithm::RoundRobin => {
                let quantum = time_quantum.ok_or_else(|| {
                    SimulationError::InvalidInput(vec![ValidationError::new(
                        ValidationErrorKind::InvalidQuantum,
                        "Round Robin requires a time quantum",
                    )])
                })?;
                round_robin::schedule(processes, quantum)
            }
        }?;

        info!(
            %algorithm,
            makespan = schedule.makespan(),
            entries = schedule.timeline.len(),
            "simulation finished"
        );

        Ok(SimulationResult {
            algorithm,
            time_quantum,
            schedule,
        })
    }

    /// Runs every policy on independent copies of the same processes.
    ///
    /// Results come back in [`Algorithm::ALL`] order.
    pub fn compare(
        &self,
        processes: &[Process],
        time_quantum: i64,
    ) -> Result<Vec<SimulationResult>, SimulationError> {
        Algorithm::ALL
            .into_iter()
            .map(|algorithm| {
                let mut request = SimulationRequest::new(processes.to_vec(), algorithm);
                if algorithm.needs_quantum() {
                    request = request.with_time_quantum(time_quantum);
                }
                self.run(&request)
            })
            .collect()
    }
}

/// Runs one request with a default [`Simulator`].
pub fn run_simulation(request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
    Simulator::new().run(request)
}

/// Runs every policy on the same processes; see [`Simulator::compare`].
pub fn compare_algorithms(
    processes: &[Process],
    time_quantum: i64,
) -> Result<Vec<SimulationResult>, SimulationError> {
    Simulator::new().compare(processes, time_quantum)
}
